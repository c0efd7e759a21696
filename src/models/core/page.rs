/// A bounded slice of the time-ordered feed.
///
/// The page size is fixed; only the offset varies with caller input. Offsets
/// arrive as strings from the API layer and must parse as non-negative
/// integers before any query text is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub limit: u32,
    pub offset: u64,
}

impl PaginationWindow {
    /// Fixed number of transactions per feed page.
    pub const LIMIT: u32 = 10;

    pub fn with_offset(offset: u64) -> Self {
        Self {
            limit: Self::LIMIT,
            offset,
        }
    }

    /// Parses a caller-supplied offset parameter.
    ///
    /// A missing parameter defaults to the first page. Input that does not
    /// parse as a non-negative integer is rejected so that it never reaches
    /// query text.
    pub fn from_offset_param(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None => Ok(Self::default()),
            Some(value) => {
                let offset = value.trim().parse::<u64>().map_err(|_| {
                    format!("offset must be a non-negative integer, got '{}'", value)
                })?;
                Ok(Self::with_offset(offset))
            }
        }
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::with_offset(0)
    }
}
