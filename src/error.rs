//! Crate-level error types.

use std::fmt;

/// Errors produced by the molscope crate.
#[derive(Debug)]
pub enum MolscopeError {
    /// The requested structure identifier is not in the sample store.
    UnknownStructure {
        /// Identifier as submitted (trimmed).
        id: String,
        /// Identifiers the store does recognise, in store order.
        known: Vec<String>,
    },
    /// No molecule preset is registered under this key.
    UnknownPreset(String),
    /// An element symbol that is not in the periodic table.
    UnknownElement(String),
    /// An atom was requested before any element was selected.
    NoElementSelected,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene serialization failure during export.
    Export(String),
}

impl fmt::Display for MolscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStructure { id, known } => {
                write!(f, "Protein with PDB ID \"{id}\" not found.")?;
                match known.split_last() {
                    Some((last, [])) => write!(f, " Try {last}."),
                    Some((last, rest)) => {
                        write!(f, " Try {}, or {last}.", rest.join(", "))
                    }
                    None => Ok(()),
                }
            }
            Self::UnknownPreset(key) => {
                write!(f, "no molecule preset named \"{key}\"")
            }
            Self::UnknownElement(symbol) => {
                write!(f, "unknown element symbol \"{symbol}\"")
            }
            Self::NoElementSelected => write!(f, "no element selected"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Export(msg) => write!(f, "scene export error: {msg}"),
        }
    }
}

impl std::error::Error for MolscopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolscopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for MolscopeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_structure_names_known_ids() {
        let err = MolscopeError::UnknownStructure {
            id: "9xyz".to_owned(),
            known: vec!["1cbn".to_owned(), "1ubq".to_owned(), "3eiy".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Protein with PDB ID \"9xyz\" not found. Try 1cbn, 1ubq, or 3eiy."
        );
    }

    #[test]
    fn unknown_structure_single_known_id() {
        let err = MolscopeError::UnknownStructure {
            id: "x".to_owned(),
            known: vec!["1cbn".to_owned()],
        };
        assert!(err.to_string().ends_with("Try 1cbn."));
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error;
        let err = MolscopeError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(MolscopeError::NoElementSelected.source().is_none());
    }
}
