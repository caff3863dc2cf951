//! Selection parsing: what the user asked to install.

use crate::catalogue::{Catalogue, ToolRecord};
use crate::error::{Result, SelectionError};

/// A parsed install target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every tool in the catalogue, in order
    All,
    /// A single tool by menu position
    Index(usize),
    /// A single tool by name (case-insensitive)
    Name(String),
    /// Every tool in one category
    Category(String),
}

impl Selection {
    /// Parse a positional install target: `all`, a numeric index, or a name.
    pub fn parse(target: &str) -> Self {
        let trimmed = target.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            Selection::All
        } else if let Ok(index) = trimmed.parse::<usize>() {
            Selection::Index(index)
        } else {
            Selection::Name(trimmed.to_string())
        }
    }

    /// Resolve against the catalogue, in catalogue order.
    ///
    /// A selection that matches nothing is an `UnknownSelection`; callers get
    /// the error before any subprocess is launched.
    pub fn resolve<'a>(&self, catalogue: &'a Catalogue) -> Result<Vec<&'a ToolRecord>> {
        let matched: Vec<&ToolRecord> = match self {
            Selection::All => catalogue.iter().collect(),
            Selection::Index(index) => catalogue.get(*index).into_iter().collect(),
            Selection::Name(name) => catalogue.find(name).into_iter().collect(),
            Selection::Category(category) => catalogue.by_category(category),
        };

        if matched.is_empty() {
            return Err(SelectionError::UnknownSelection(self.describe()).into());
        }
        Ok(matched)
    }

    fn describe(&self) -> String {
        match self {
            Selection::All => "all".to_string(),
            Selection::Index(index) => index.to_string(),
            Selection::Name(name) => name.clone(),
            Selection::Category(category) => format!("category:{}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArmoryError;

    fn catalogue() -> Catalogue {
        Catalogue::from_toml(
            r#"
                [[tools]]
                name = "nmap"
                category = "information_gathering"
                steps = ["apt-get install -y nmap"]

                [[tools]]
                name = "hydra"
                category = "password_attack"
                steps = ["apt-get install -y hydra"]

                [[tools]]
                name = "john"
                category = "password_attack"
                steps = ["apt-get install -y john"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn parses_all_index_and_name() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse("ALL"), Selection::All);
        assert_eq!(Selection::parse("2"), Selection::Index(2));
        assert_eq!(Selection::parse("nmap"), Selection::Name("nmap".to_string()));
    }

    #[test]
    fn resolves_all_in_catalogue_order() {
        let catalogue = catalogue();
        let matched = Selection::All.resolve(&catalogue).unwrap();
        let names: Vec<_> = matched.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["nmap", "hydra", "john"]);
    }

    #[test]
    fn resolves_category_filter() {
        let catalogue = catalogue();
        let matched = Selection::Category("password_attack".to_string())
            .resolve(&catalogue)
            .unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].name, "hydra");
    }

    #[test]
    fn out_of_range_index_is_unknown_selection() {
        let catalogue = catalogue();
        let result = Selection::Index(99).resolve(&catalogue);
        assert!(matches!(
            result,
            Err(ArmoryError::Selection(SelectionError::UnknownSelection(_)))
        ));
    }

    #[test]
    fn unknown_name_is_unknown_selection() {
        let catalogue = catalogue();
        assert!(Selection::Name("ghidra".to_string()).resolve(&catalogue).is_err());
    }
}
