// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;

/// Keyword table, checked top to bottom. First category with a keyword
/// contained in the lowercased name wins.
static KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Hr,
        &["workday", "successfactors", "bamboo", "zenefits", "paylocity"],
    ),
    (
        Category::Software,
        &["microsoft", "salesforce", "oracle", "sap", "aws", "azure"],
    ),
    (Category::Hardware, &["dell", "hp", "lenovo", "cisco", "emc"]),
    (
        Category::Healthcare,
        &["epic", "cerner", "meditech", "allscripts", "athena"],
    ),
    (
        Category::Financial,
        &["bloomberg", "reuters", "factset", "morningstar", "quickbooks"],
    ),
];

pub fn classify(name: &str) -> Category {
    let hay = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| hay.contains(w)))
        .map(|(c, _)| *c)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_other() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("   "), Category::Other);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        // "sap" is a software keyword, "successfactors" an HR one; HR is checked first.
        assert_eq!(classify("SAP SuccessFactors"), Category::Hr);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("QUICKBOOKS Online"), Category::Financial);
        assert_eq!(classify("Cisco Meraki"), Category::Hardware);
    }
}
