//! Card brand table.
//!
//! This module provides the static [`BrandDefinition`] entries that every
//! detector and validator in the crate reads, the closed [`BrandId`] set,
//! and the [`CardBrand`] detection result.
//!
//! The built-in table is a `static` and is never mutated. Callers needing a
//! different set of brands (or a different precedence order) wrap their own
//! static slice in a [`BrandTable`].

use std::fmt;
use std::str::FromStr;

/// Stable identifier of a card brand.
///
/// The set is closed: matching on it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BrandId {
    /// Visa
    Visa,
    /// Mastercard
    Mastercard,
    /// American Express
    AmericanExpress,
    /// Discover
    Discover,
    /// Diners Club
    DinersClub,
    /// Elo (Brazil)
    Elo,
    /// Hiper (Brazil)
    Hiper,
    /// Hipercard (Brazil)
    Hipercard,
    /// JCB
    Jcb,
    /// Maestro
    Maestro,
    /// Mir (Russia)
    Mir,
    /// UnionPay
    #[cfg_attr(feature = "serde", serde(rename = "unionpay"))]
    UnionPay,
    /// Verve (Nigeria)
    Verve,
}

impl BrandId {
    /// Every brand identifier, in built-in table order.
    pub const ALL: [BrandId; 13] = [
        Self::Visa,
        Self::Mastercard,
        Self::AmericanExpress,
        Self::Discover,
        Self::DinersClub,
        Self::Elo,
        Self::Hiper,
        Self::Hipercard,
        Self::Jcb,
        Self::Maestro,
        Self::Mir,
        Self::UnionPay,
        Self::Verve,
    ];

    /// Returns the identifier string, e.g. `"american-express"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::AmericanExpress => "american-express",
            Self::Discover => "discover",
            Self::DinersClub => "diners-club",
            Self::Elo => "elo",
            Self::Hiper => "hiper",
            Self::Hipercard => "hipercard",
            Self::Jcb => "jcb",
            Self::Maestro => "maestro",
            Self::Mir => "mir",
            Self::UnionPay => "unionpay",
            Self::Verve => "verve",
        }
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandIdError {
    input: String,
}

impl fmt::Display for ParseBrandIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown brand id '{}'", self.input)
    }
}

impl std::error::Error for ParseBrandIdError {}

impl FromStr for BrandId {
    type Err = ParseBrandIdError;

    /// Parses an identifier case-insensitively. A few common aliases
    /// (`amex`, `diners`, `union-pay`) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let id = match lowered.as_str() {
            "amex" | "american express" => Self::AmericanExpress,
            "diners" | "dinersclub" | "diners club" => Self::DinersClub,
            "union-pay" | "union pay" => Self::UnionPay,
            other => {
                return Self::ALL
                    .iter()
                    .copied()
                    .find(|id| id.as_str() == other)
                    .ok_or_else(|| ParseBrandIdError {
                        input: s.to_string(),
                    })
            }
        };
        Ok(id)
    }
}

/// A leading-digit match rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Literal digit prefix, e.g. `"4"` for Visa.
    Prefix(&'static str),
    /// Inclusive range over the first `width()` digits, where the width is
    /// the digit count of `min`. Both bounds share that width.
    Range {
        /// Lower bound (inclusive).
        min: u32,
        /// Upper bound (inclusive).
        max: u32,
    },
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(prefix) => f.write_str(prefix),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

/// Display label of a brand's security code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SecurityCodeLabel {
    /// Card Verification Value
    Cvv,
    /// Card Verification Code
    Cvc,
    /// Card Identification Number
    Cid,
    /// Card Verification Number
    Cvn,
    /// Card Verification Element
    Cve,
    /// Card Verification Parameter 2
    Cvp2,
}

impl SecurityCodeLabel {
    /// Returns the label as printed on checkout forms.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cvv => "CVV",
            Self::Cvc => "CVC",
            Self::Cid => "CID",
            Self::Cvn => "CVN",
            Self::Cve => "CVE",
            Self::Cvp2 => "CVP2",
        }
    }
}

impl fmt::Display for SecurityCodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected shape of a brand's security code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityCode {
    /// Digit count, 3 or 4.
    pub size: usize,
    /// Display label.
    pub label: SecurityCodeLabel,
}

/// Static definition of one card brand.
///
/// An entry with empty `patterns` is a placeholder: it is known by name but
/// never matched by detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandDefinition {
    /// Stable identifier.
    pub id: BrandId,
    /// Human-readable brand name.
    pub display_name: &'static str,
    /// Match rules, tried in order.
    pub patterns: &'static [Pattern],
    /// Digit offsets where a display separator goes.
    pub gaps: &'static [usize],
    /// Accepted sanitized lengths.
    pub lengths: &'static [usize],
    /// Security code shape.
    pub code: SecurityCode,
}

impl BrandDefinition {
    /// Returns true if `length` is one of this brand's accepted lengths.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }

    /// Returns true for entries that can never be detected.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Display for BrandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

const fn placeholder(
    id: BrandId,
    display_name: &'static str,
    label: SecurityCodeLabel,
) -> BrandDefinition {
    BrandDefinition {
        id,
        display_name,
        patterns: &[],
        gaps: &[],
        lengths: &[],
        code: SecurityCode { size: 3, label },
    }
}

/// Built-in brand definitions, in detection order.
pub static BRANDS: [BrandDefinition; 13] = [
    BrandDefinition {
        id: BrandId::Visa,
        display_name: "Visa",
        patterns: &[Pattern::Prefix("4")],
        gaps: &[4, 8, 12],
        lengths: &[13, 16, 19],
        code: SecurityCode {
            size: 3,
            label: SecurityCodeLabel::Cvv,
        },
    },
    BrandDefinition {
        id: BrandId::Mastercard,
        display_name: "Mastercard",
        patterns: &[
            Pattern::Range { min: 51, max: 55 },
            Pattern::Range {
                min: 2221,
                max: 2720,
            },
        ],
        gaps: &[4, 8, 12],
        lengths: &[16],
        code: SecurityCode {
            size: 3,
            label: SecurityCodeLabel::Cvc,
        },
    },
    BrandDefinition {
        id: BrandId::AmericanExpress,
        display_name: "American Express",
        patterns: &[Pattern::Prefix("34"), Pattern::Prefix("37")],
        gaps: &[4, 10],
        lengths: &[15],
        code: SecurityCode {
            size: 4,
            label: SecurityCodeLabel::Cid,
        },
    },
    BrandDefinition {
        id: BrandId::Discover,
        display_name: "Discover",
        patterns: &[
            Pattern::Prefix("6011"),
            Pattern::Range { min: 644, max: 649 },
            Pattern::Prefix("65"),
        ],
        gaps: &[4, 8, 12],
        lengths: &[16, 19],
        code: SecurityCode {
            size: 3,
            label: SecurityCodeLabel::Cid,
        },
    },
    // Regional and legacy brands: named, not yet matchable.
    placeholder(BrandId::DinersClub, "Diners Club", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Elo, "Elo", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Hiper, "Hiper", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Hipercard, "Hipercard", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Jcb, "JCB", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Maestro, "Maestro", SecurityCodeLabel::Cvc),
    placeholder(BrandId::Mir, "Mir", SecurityCodeLabel::Cvp2),
    placeholder(BrandId::UnionPay, "UnionPay", SecurityCodeLabel::Cvn),
    placeholder(BrandId::Verve, "Verve", SecurityCodeLabel::Cvv),
];

static BUILTIN: BrandTable = BrandTable::new(&BRANDS);

/// An ordered, read-only collection of brand definitions.
///
/// Order is significant: detection returns the first entry with a matching
/// pattern.
#[derive(Debug, Clone, Copy)]
pub struct BrandTable {
    brands: &'static [BrandDefinition],
}

impl BrandTable {
    /// Wraps a static slice of definitions.
    #[inline]
    pub const fn new(brands: &'static [BrandDefinition]) -> Self {
        Self { brands }
    }

    /// Returns the built-in table.
    #[inline]
    pub fn builtin() -> &'static BrandTable {
        &BUILTIN
    }

    /// Iterates the definitions in table order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'static BrandDefinition> {
        let brands: &'static [BrandDefinition] = self.brands;
        brands.iter()
    }

    /// Number of entries, placeholders included.
    #[inline]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Looks up a definition by id.
    pub fn get(&self, id: BrandId) -> Option<&'static BrandDefinition> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Returns true if any brand accepts `length` digits.
    pub fn accepts_length(&self, length: usize) -> bool {
        self.brands.iter().any(|b| b.is_valid_length(length))
    }

    /// Returns true if any brand expects a security code of `size` digits.
    pub fn accepts_code_size(&self, size: usize) -> bool {
        self.brands.iter().any(|b| b.code.size == size)
    }
}

impl Default for BrandTable {
    fn default() -> Self {
        BUILTIN
    }
}

/// Outcome of brand detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    /// A brand from the table matched.
    Known(&'static BrandDefinition),
    /// No pattern matched.
    Unknown,
}

impl CardBrand {
    /// Returns the matched definition, if any.
    #[inline]
    pub const fn definition(&self) -> Option<&'static BrandDefinition> {
        match self {
            Self::Known(def) => Some(*def),
            Self::Unknown => None,
        }
    }

    /// Returns the matched brand id, if any.
    #[inline]
    pub fn id(&self) -> Option<BrandId> {
        self.definition().map(|def| def.id)
    }

    /// Returns true if a brand matched.
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Human-readable name, `"unknown"` when nothing matched.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Known(def) => def.display_name,
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(def) => serializer.serialize_str(def.id.as_str()),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}
