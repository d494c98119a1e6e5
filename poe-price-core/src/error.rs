use thiserror::Error;

/// Reasons a clipboard item text could not be turned into a [`Key`](crate::Key).
///
/// Every variant aborts the whole parse; no partial key is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is missing the group delimiter, the rarity marker, or a
    /// structural line the header needs.
    #[error("Malformed item text: {0}")]
    MalformedInput(String),

    /// The item has not been identified yet, so its mods are unknown.
    #[error("Item is unidentified")]
    UnidentifiedItem,

    /// The item already carries a trade note.
    #[error("Item already has a note")]
    AlreadyNoted,

    /// The rarity line holds a value outside the known set.
    #[error("Unknown rarity: {0}")]
    UnknownRarity(String),

    /// The rarity reached none of the classification tiers.
    #[error("Cannot resolve frame type for rarity: {0}")]
    UnresolvedFrameType(String),

    /// A gem without a readable level line.
    #[error("Missing gem data: {0}")]
    MissingGemData(String),
}

impl ParseError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn unknown_rarity(msg: impl Into<String>) -> Self {
        Self::UnknownRarity(msg.into())
    }

    pub fn missing_gem_data(msg: impl Into<String>) -> Self {
        Self::MissingGemData(msg.into())
    }
}

/// Reasons a price-feed record could not be turned into a [`Key`](crate::Key).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The category label is not part of the selected provider's vocabulary.
    #[error("Unknown feed category: {0}")]
    UnknownCategory(String),

    /// A field the category needs is absent from the record.
    #[error("Feed record in {category} is missing `{field}`")]
    MissingField {
        category: String,
        field: &'static str,
    },
}

impl NormalizeError {
    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }

    pub fn missing_field(category: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            category: category.into(),
            field,
        }
    }
}
