//! Respondent file naming conventions.

/// Name of the combined output file written by collation.
pub const COLLATED_FILE_NAME: &str = "collated_answers.txt";

/// What a respondent file holds, which decides its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    /// A raw answer sheet, as retrieved and as read by collation.
    Sheet,
    /// A single encoded answer vector.
    EncodedList,
}

impl FilePurpose {
    fn prefix(self) -> &'static str {
        match self {
            FilePurpose::Sheet => "answers_respondent_",
            FilePurpose::EncodedList => "answers_list_respondent_",
        }
    }
}

const EXTENSION: &str = ".txt";

/// File name for respondent `index` with the given purpose.
pub fn respondent_file_name(index: u32, purpose: FilePurpose) -> String {
    format!("{}{index}{EXTENSION}", purpose.prefix())
}

/// Extract the respondent index from a file name following the `purpose`
/// convention. Returns `None` for any other name, including index `0`.
pub fn respondent_index(file_name: &str, purpose: FilePurpose) -> Option<u32> {
    let digits = file_name
        .strip_prefix(purpose.prefix())?
        .strip_suffix(EXTENSION)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|&n| n >= 1)
}

/// Whether `file_name` carries the `purpose` prefix and extension, whatever
/// sits between them.
pub fn has_respondent_shape(file_name: &str, purpose: FilePurpose) -> bool {
    file_name.starts_with(purpose.prefix())
        && file_name.ends_with(EXTENSION)
        && file_name.len() >= purpose.prefix().len() + EXTENSION.len()
}
