//! Toolchain languages known to CMake.
//!
//! Entries such as `CMAKE_<LANG>_COMPILER` are multiplied across this set.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A language CMake can enable with `project()` or `enable_language()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageTag {
    C,
    Cxx,
    CSharp,
    Cuda,
    ObjC,
    ObjCxx,
    Fortran,
    Hip,
    Ispc,
    Swift,
    Asm,
    AsmNasm,
    AsmMarmasm,
    AsmMasm,
    AsmAtt,
}

impl LanguageTag {
    /// Every supported language, in CMake's documentation order.
    pub const ALL: [LanguageTag; 15] = [
        Self::C,
        Self::Cxx,
        Self::CSharp,
        Self::Cuda,
        Self::ObjC,
        Self::ObjCxx,
        Self::Fortran,
        Self::Hip,
        Self::Ispc,
        Self::Swift,
        Self::Asm,
        Self::AsmNasm,
        Self::AsmMarmasm,
        Self::AsmMasm,
        Self::AsmAtt,
    ];

    /// Returns the name CMake uses for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cxx => "CXX",
            Self::CSharp => "CSharp",
            Self::Cuda => "CUDA",
            Self::ObjC => "OBJC",
            Self::ObjCxx => "OBJCXX",
            Self::Fortran => "Fortran",
            Self::Hip => "HIP",
            Self::Ispc => "ISPC",
            Self::Swift => "Swift",
            Self::Asm => "ASM",
            Self::AsmNasm => "ASM_NASM",
            Self::AsmMarmasm => "ASM_MARMASM",
            Self::AsmMasm => "ASM_MASM",
            Self::AsmAtt => "ASM_ATT",
        }
    }

    /// Parses a language from its CMake name. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown language '{s}'"))
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
