use archivum_engine::KindSelection;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Kind filter values for `archivum list --kind`. Mirrors the library
/// view's checkboxes; `movement` covers Movement and Event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    All,
    Person,
    Movement,
    Resource,
}

impl fmt::Display for KindArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindArg::All => write!(f, "all"),
            KindArg::Person => write!(f, "person"),
            KindArg::Movement => write!(f, "movement"),
            KindArg::Resource => write!(f, "resource"),
        }
    }
}

/// Fold repeated `--kind` flags into a checkbox selection. No flags at
/// all behaves like "All" checked.
pub fn kind_selection(kinds: &[KindArg]) -> KindSelection {
    if kinds.is_empty() {
        return KindSelection::everything();
    }

    let mut selection = KindSelection {
        all: false,
        person: false,
        movement: false,
        resource: false,
    };
    for kind in kinds {
        match kind {
            KindArg::All => selection.all = true,
            KindArg::Person => selection.person = true,
            KindArg::Movement => selection.movement = true,
            KindArg::Resource => selection.resource = true,
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_everything() {
        assert!(kind_selection(&[]).all);
    }

    #[test]
    fn all_flag_sets_the_override() {
        let selection = kind_selection(&[KindArg::All, KindArg::Person]);
        assert!(selection.all);
        assert!(selection.person);
    }

    #[test]
    fn specific_flags_accumulate() {
        let selection = kind_selection(&[KindArg::Person, KindArg::Resource]);
        assert!(!selection.all);
        assert!(selection.person);
        assert!(!selection.movement);
        assert!(selection.resource);
    }
}
