use std::fmt;

use typecol_common::error::Error;

/// The closed set of element kinds a column can hold.
///
/// `None` is the uninitialized tag: no container ever has this kind and
/// conversion to it is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    #[default]
    None,
    Float,
    Int,
    String,
    Bool,
    DateTime,
    Generic,
}

impl Kind {
    /// Every kind a container can have, in conversion-matrix order.
    pub const VALUE_KINDS: [Kind; 6] = [
        Kind::Float,
        Kind::Int,
        Kind::String,
        Kind::Bool,
        Kind::DateTime,
        Kind::Generic,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Kind::None => "none",
            Kind::Float => "float",
            Kind::Int => "int",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::DateTime => "datetime",
            Kind::Generic => "generic",
        }
    }

    #[inline]
    pub const fn is_value_kind(&self) -> bool {
        !matches!(self, Kind::None)
    }

    /// Maps a loose type name to a kind, returning `Kind::None` for anything
    /// unrecognized.
    ///
    /// Besides the canonical names this accepts sized numeric names
    /// (`float32`, `int8`, `uint64`, ...) and common aliases such as
    /// `timestamp` or `interface`.
    pub fn infer_from_name(name: &str) -> Kind {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "float" | "float32" | "float64" | "f32" | "f64" | "double" => Kind::Float,
            "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16"
            | "uint32" | "uint64" | "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32"
            | "u64" | "isize" | "usize" => Kind::Int,
            "string" | "str" | "text" => Kind::String,
            "bool" | "boolean" => Kind::Bool,
            "datetime" | "date" | "time" | "time.time" | "timestamp" => Kind::DateTime,
            "generic" | "interface" | "interface{}" | "any" | "object" => Kind::Generic,
            _ => Kind::None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Kind {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "float" => Ok(Kind::Float),
            "int" => Ok(Kind::Int),
            "string" => Ok(Kind::String),
            "bool" => Ok(Kind::Bool),
            "datetime" => Ok(Kind::DateTime),
            "generic" => Ok(Kind::Generic),
            _ => Err(Error::invalid_kind(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in Kind::VALUE_KINDS {
            assert_eq!(Kind::try_from(kind.name()).unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
            assert!(kind.is_value_kind());
        }
        assert!(!Kind::None.is_value_kind());
        assert_eq!(Kind::default(), Kind::None);
    }

    #[test]
    fn test_kind_try_from_rejects_unknown() {
        let err = Kind::try_from("float32").unwrap_err();
        assert!(err.is_invalid_kind());
        assert!(Kind::try_from("none").unwrap_err().is_invalid_kind());
    }

    #[test]
    fn test_infer_from_name() {
        assert_eq!(Kind::infer_from_name("float32"), Kind::Float);
        assert_eq!(Kind::infer_from_name(" Float64 "), Kind::Float);
        assert_eq!(Kind::infer_from_name("int8"), Kind::Int);
        assert_eq!(Kind::infer_from_name("uint64"), Kind::Int);
        assert_eq!(Kind::infer_from_name("String"), Kind::String);
        assert_eq!(Kind::infer_from_name("boolean"), Kind::Bool);
        assert_eq!(Kind::infer_from_name("time.Time"), Kind::DateTime);
        assert_eq!(Kind::infer_from_name("interface{}"), Kind::Generic);
        assert_eq!(Kind::infer_from_name("complex128"), Kind::None);
    }
}
