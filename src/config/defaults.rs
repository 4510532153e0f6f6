//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn home() -> String {
        "index.html".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data/publications.json".into()
    }

    pub fn template() -> PathBuf {
        "template.html".into()
    }

    pub fn output() -> PathBuf {
        "publications".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod list {
        use std::path::PathBuf;

        pub fn template() -> Option<PathBuf> {
            None
        }

        pub fn output() -> PathBuf {
            "index.html".into()
        }
    }
}
