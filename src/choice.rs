//! Closed sets of enumerated choices.
//!
//! Every set is declared through [`choice!`], which gives it a stable
//! kebab-case key, a human label, `Display`, `FromStr`, a serde name in
//! SCREAMING_SNAKE_CASE and a conversion into builder [`Items`].
//!
//! [`Items`]: crate::builder::Items
use std::fmt;

use crate::error::{Error, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

pub trait Choice: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Name of the set, used in error messages ("side", "drink", ...).
    const KIND: &'static str;
    /// Every member in declaration order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $( $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::choice::Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn key(self) -> &'static str {
                match self { $( Self::$variant => $key ),+ }
            }

            fn label(self) -> &'static str {
                match self { $( Self::$variant => $label ),+ }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::choice::Choice::label(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::choice::parse(raw)
            }
        }

        impl ::std::convert::From<$name> for $crate::builder::Items<$name> {
            fn from(value: $name) -> Self {
                Self::one(value)
            }
        }
    };
}

pub(crate) use choice;

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

/// Case-insensitive lookup by key or label; `_`, `-` and spaces are interchangeable.
pub fn parse<C: Choice>(raw: &str) -> Result<C> {
    let wanted = normalize(raw);
    C::ALL
        .iter()
        .copied()
        .find(|c| normalize(c.key()) == wanted || normalize(c.label()) == wanted)
        .ok_or_else(|| Error::UnknownChoice {
            kind: C::KIND,
            value: raw.to_string(),
        })
}

/// `side: fries, onion-rings, chips, side-salad`
pub fn describe<C: Choice>() -> String {
    let keys = C::ALL.iter().map(|c| c.key()).collect::<Vec<_>>();
    format!("{}: {}", C::KIND, keys.join(", "))
}

/// Human-readable list: `[Fries, Onion Rings]`.
pub fn list_labels<C: Choice>(items: &[C]) -> String {
    let labels = items.iter().map(|c| c.label()).collect::<Vec<_>>();
    format!("[{}]", labels.join(", "))
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
