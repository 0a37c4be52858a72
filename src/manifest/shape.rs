//! Classification of tokenized records by field count.

use csv::StringRecord;

/// Number of fields in a full image record.
pub const FULL_FIELDS: usize = 2;

/// Number of fields in a partial image record.
pub const PARTIAL_FIELDS: usize = 6;

/// The shape of a single manifest record, borrowed from the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordShape<'a> {
    /// `name,path`
    Full { name: &'a str, path: &'a str },
    /// `name,path,ax,ay,bx,by` with the coordinates still unparsed.
    Partial {
        name: &'a str,
        path: &'a str,
        coords: [&'a str; 4],
    },
    /// Any other number of fields.
    Invalid { field_count: usize },
}

impl<'a> RecordShape<'a> {
    /// Decides the shape of a record from its field count alone.
    pub fn classify(record: &'a StringRecord) -> Self {
        match record.len() {
            FULL_FIELDS => Self::Full {
                name: &record[0],
                path: &record[1],
            },
            PARTIAL_FIELDS => Self::Partial {
                name: &record[0],
                path: &record[1],
                coords: [&record[2], &record[3], &record[4], &record[5]],
            },
            field_count => Self::Invalid { field_count },
        }
    }
}
