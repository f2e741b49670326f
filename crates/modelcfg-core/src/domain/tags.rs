//! Zero-sized wire tags.
//!
//! Each record stores its discriminants as marker types, so a record with
//! the wrong `type` or `model_format` cannot be constructed at all. The
//! markers only serialize; reading them back goes through validation.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! string_tag {
    ($(#[$meta:meta])* $name:ident = $value:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// The constant wire value of this tag.
            pub const VALUE: &'static str = $value;
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(Self::VALUE)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(Self::VALUE)
            }
        }
    };
}

string_tag!(
    /// `type` tag of ONNX records: always `"onnx"`.
    OnnxTag = "onnx"
);

string_tag!(
    /// `type` tag shared by the diffusers and checkpoint records: always `"main"`.
    MainTag = "main"
);

string_tag!(
    /// `model_format` tag of diffusers records.
    DiffusersFormat = "diffusers"
);

string_tag!(
    /// `model_format` tag of checkpoint records.
    CheckpointFormat = "checkpoint"
);

/// `model_format` of ONNX records: always an explicit `null`.
///
/// This is a discriminant, not an absent value. It is always written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullFormat;

impl Serialize for NullFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}
