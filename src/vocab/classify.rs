//! Term classification into output sections

use std::fmt;

/// Output section a term is emitted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Class,
    Property,
    Datatype,
    Other,
}

impl Bucket {
    /// All buckets in emission order
    pub const ALL: [Bucket; 4] = [Bucket::Class, Bucket::Property, Bucket::Datatype, Bucket::Other];

    /// Classify a resolved type string by substring, in fixed priority order
    pub fn from_type_string(type_string: &str) -> Self {
        if type_string.contains("Class") {
            Bucket::Class
        } else if type_string.contains("Property") {
            Bucket::Property
        } else if type_string.contains("Datatype") {
            Bucket::Datatype
        } else {
            Bucket::Other
        }
    }

    /// Section comment printed above the bucket's declarations
    pub fn section_comment(&self) -> &'static str {
        match self {
            Bucket::Class => "Class definitions",
            Bucket::Property => "Property definitions",
            Bucket::Datatype => "Datatype definitions",
            Bucket::Other => "Extra definitions",
        }
    }

    /// Declarator keyword for terms in this bucket
    pub fn declarator(&self) -> &'static str {
        match self {
            Bucket::Property => "property",
            Bucket::Class | Bucket::Datatype | Bucket::Other => "term",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bucket::Class => "class",
            Bucket::Property => "property",
            Bucket::Datatype => "datatype",
            Bucket::Other => "other",
        };
        f.write_str(name)
    }
}

/// Outcome of resolving a term's declared types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeResolution {
    /// All declared types resolved; the joined type string (empty if untyped)
    Resolved(String),
    /// A declared type refers to a term that does not exist
    Unresolved { reference: String },
}

/// Assign a bucket to a resolution outcome
///
/// Unresolved types always land in [`Bucket::Other`].
pub fn classify(resolution: &TypeResolution) -> Bucket {
    match resolution {
        TypeResolution::Resolved(type_string) => Bucket::from_type_string(type_string),
        TypeResolution::Unresolved { .. } => Bucket::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(s: &str) -> TypeResolution {
        TypeResolution::Resolved(s.to_string())
    }

    #[test]
    fn test_namespaced_class_types() {
        assert_eq!(classify(&resolved("http://www.w3.org/2002/07/owl#Class")), Bucket::Class);
        assert_eq!(classify(&resolved("http://www.w3.org/2000/01/rdf-schema#Class")), Bucket::Class);
    }

    #[test]
    fn test_property_and_datatype() {
        assert_eq!(
            classify(&resolved("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property")),
            Bucket::Property
        );
        assert_eq!(
            classify(&resolved("http://www.w3.org/2002/07/owl#ObjectProperty")),
            Bucket::Property
        );
        assert_eq!(
            classify(&resolved("http://www.w3.org/2000/01/rdf-schema#Datatype")),
            Bucket::Datatype
        );
    }

    #[test]
    fn test_priority_order() {
        // Both substrings present: Class wins
        assert_eq!(
            classify(&resolved("http://ex.org/PropertyClass")),
            Bucket::Class
        );
        assert_eq!(
            classify(&resolved("http://ex.org/DatatypeProperty")),
            Bucket::Property
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(classify(&resolved("")), Bucket::Other);
        assert_eq!(classify(&resolved("http://ex.org/Thing")), Bucket::Other);
        // Matching is case-sensitive
        assert_eq!(classify(&resolved("http://ex.org/class")), Bucket::Other);
        assert_eq!(
            classify(&TypeResolution::Unresolved { reference: "http://ex.org/v#Class".into() }),
            Bucket::Other
        );
    }

    #[test]
    fn test_deterministic() {
        let input = resolved("http://www.w3.org/2002/07/owl#DatatypeProperty");
        let first = classify(&input);
        for _ in 0..10 {
            assert_eq!(classify(&input), first);
        }
    }

    #[test]
    fn test_declarators() {
        assert_eq!(Bucket::Property.declarator(), "property");
        assert_eq!(Bucket::Class.declarator(), "term");
        assert_eq!(Bucket::Datatype.declarator(), "term");
        assert_eq!(Bucket::Other.declarator(), "term");
        assert_eq!(Bucket::Other.section_comment(), "Extra definitions");
    }
}
