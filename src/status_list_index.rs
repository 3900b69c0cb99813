use crate::{Error, Result};

/// `statusListIndex` appears both as a JSON number and as a decimal string in the wild.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum StatusListIndex {
    Number(u64),
    Text(String),
}

impl StatusListIndex {
    pub fn position(&self) -> Result<usize> {
        let position = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<u64>().map_err(|e| {
                Error::RevocationCheck(
                    format!(
                        "statusListIndex {:?} is not a non-negative integer: {}",
                        s, e
                    )
                    .into(),
                )
            })?,
        };
        usize::try_from(position).map_err(|_| {
            Error::RevocationCheck(format!("statusListIndex {} is out of range", position).into())
        })
    }
}

impl From<usize> for StatusListIndex {
    fn from(position: usize) -> Self {
        Self::Number(position as u64)
    }
}
