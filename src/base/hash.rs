//! Stable identity hasher.
//!
//! Every internal name the emitter produces is derived from a fingerprint of
//! the declaration's source text. A runtime companion re-derives the same
//! names from the fingerprint alone, so the functions here are part of the
//! naming contract and must never change output for a given input.

use std::fmt;

/// Seed for [`fingerprint`].
pub const INITIAL_HASH: u64 = 5381;

/// Mixed into every derived name. Any symbol carrying a derived name
/// identifies itself as generator-owned.
pub const DISCLAIMER: &str = "Please do not rely on these generated members in your application.";

/// Left-shift-5-add rolling hash (`h = h * 33 + c`), wrapping on overflow.
///
/// `c` runs over UTF-16 code units, so characters outside the Basic
/// Multilingual Plane contribute both surrogates.
pub fn roll(seed: u64, text: &str) -> u64 {
    text.encode_utf16().fold(seed, |hash, unit| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(unit))
    })
}

/// Fingerprint of a declaration's exact source text.
pub fn fingerprint(text: &str) -> u64 {
    roll(INITIAL_HASH, text)
}

/// Kind of generated member a derived name is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    SharedMember,
    StructMember,
    SharedType,
    StructType,
}

impl MemberKind {
    pub const ALL: [MemberKind; 4] = [
        MemberKind::SharedMember,
        MemberKind::StructMember,
        MemberKind::SharedType,
        MemberKind::StructType,
    ];

    /// Tag text rolled into the hash for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            MemberKind::SharedMember => "SharedMember",
            MemberKind::StructMember => "StructMember",
            MemberKind::SharedType => "SharedType",
            MemberKind::StructType => "StructType",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Derive the 16-hex-digit internal name suffix for `kind`.
///
/// Collisions between distinct `(fingerprint, kind)` pairs are not checked;
/// one would surface as a duplicate symbol in the downstream toolchain.
pub fn derive_name(fingerprint: u64, kind: MemberKind) -> String {
    let hash = roll(roll(fingerprint, kind.tag()), DISCLAIMER);
    format!("{hash:016x}")
}
