use serde::{Deserialize, Serialize};

/// Libraries the generated job loads on top of the framework defaults.
///
/// Serialized as a single space-separated string, which is the form the grid plugin consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LibraryList(Vec<String>);

impl LibraryList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Split a whitespace-separated list. Runs of blanks count as one separator.
    pub fn from_whitespace(list: &str) -> Self {
        Self(list.split_whitespace().map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, lib: &str) -> bool {
        self.0.iter().any(|l| l == lib)
    }

    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl From<String> for LibraryList {
    fn from(value: String) -> Self {
        Self::from_whitespace(&value)
    }
}

impl From<LibraryList> for String {
    fn from(value: LibraryList) -> Self {
        value.joined()
    }
}

impl<S: Into<String>> FromIterator<S> for LibraryList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::LibraryList;

    #[test]
    fn double_blanks_parse_like_single() {
        let single = LibraryList::from_whitespace("libGui.so libProof.so libMinuit.so");
        let double = LibraryList::from_whitespace("libGui.so  libProof.so  libMinuit.so ");
        assert_eq!(single, double);
        assert_eq!(double.len(), 3);
    }

    #[test]
    fn joined_uses_single_blank() {
        let libs: LibraryList = ["libSTEER.so", "libCDB.so"].into_iter().collect();
        assert_eq!(libs.joined(), "libSTEER.so libCDB.so");
        assert!(libs.contains("libCDB.so"));
        assert!(!libs.contains("libCDB"));
    }

    #[test]
    fn serde_as_string() {
        let libs = LibraryList::from_whitespace("libTender.so   libTenderSupplies.so");
        let json = serde_json::to_string(&libs).unwrap();
        assert_eq!(json, r#""libTender.so libTenderSupplies.so""#);

        let back: LibraryList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, libs);
    }
}
