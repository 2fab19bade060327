//! Site navigation tree and route highlighting.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [NavLink],
}

impl NavEntry {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }

    pub fn is_active(&self, route: &str) -> bool {
        self.href == route || self.dropdown.iter().any(|item| item.href == route)
    }
}

const fn link(name: &'static str, href: &'static str) -> NavLink {
    NavLink { name, href }
}

const fn entry(name: &'static str, href: &'static str, dropdown: &'static [NavLink]) -> NavEntry {
    NavEntry { name, href, dropdown }
}

pub const NAVIGATION: &[NavEntry] = &[
    entry("Home", "/", &[]),
    entry(
        "Company",
        "/about",
        &[
            link("Our Story", "/our-story"),
            link("Vision, Mission & Values", "/vision-mission-values"),
            link("Leadership Team", "/leadership-team"),
            link("CSR Initiatives", "/csr-initiatives"),
            link("Achievements & Awards", "/achievements-awards"),
        ],
    ),
    entry(
        "Manufacturing",
        "/manufacturing",
        &[
            link("Manufacturing Facilities", "/manufacturing-facilities"),
            link("Production Processes", "/production-processes"),
            link("Quality Control & Testing", "/quality-control-testing"),
            link("In-House Tooling & Moulding", "/in-house-tooling-moulding"),
            link("Material Compounding", "/material-compounding"),
            link("R&D & Innovation", "/rd-innovation"),
        ],
    ),
    entry("Products", "/products", &[]),
    entry(
        "Capabilities",
        "/capabilities",
        &[
            link("In-House Compounding", "/capabilities/in-house-compounding"),
            link("Technical Expertise", "/capabilities/technical-expertise"),
            link("Testing & Quality Assurance", "/capabilities/testing-quality-assurance"),
            link("Product Customization", "/capabilities/product-customization"),
            link("Large-Scale Production", "/capabilities/large-scale-production"),
            link("Prototype Development", "/capabilities/prototype-development"),
            link("Supply Chain & Logistics", "/capabilities/supply-chain-logistics"),
        ],
    ),
    entry(
        "Compliance",
        "/compliance",
        &[
            link("Quality Management System", "/compliance/quality-management-system"),
            link("Environmental Standards", "/compliance/environmental-standards"),
            link("Occupational Health & Safety", "/compliance/occupational-health-safety"),
            link(
                "Material Compliance Certifications",
                "/compliance/material-compliance-certifications",
            ),
        ],
    ),
    entry("Certifications", "/certifications", &[]),
    entry("Industries Served", "/industries", &[]),
];

/// Every href that should be highlighted for `route`: the owning top-level
/// entry and, when the route is a dropdown item, that item too.
pub fn active_paths<'a>(route: &str, tree: &'a [NavEntry]) -> HashSet<&'a str> {
    let mut active = HashSet::new();
    for entry in tree.iter().filter(|entry| entry.is_active(route)) {
        active.insert(entry.href);
        if let Some(item) = entry.dropdown.iter().find(|item| item.href == route) {
            active.insert(item.href);
        }
    }
    active
}

/// Where a path sits in the navigation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Located<'a> {
    pub entry: &'a NavEntry,
    pub child: Option<&'a NavLink>,
}

impl<'a> Located<'a> {
    pub fn name(&self) -> &'static str {
        self.child.map_or(self.entry.name, |child| child.name)
    }
}

pub fn locate<'a>(route: &str, tree: &'a [NavEntry]) -> Option<Located<'a>> {
    tree.iter().find_map(|entry| {
        if entry.href == route {
            return Some(Located { entry, child: None });
        }
        entry
            .dropdown
            .iter()
            .find(|item| item.href == route)
            .map(|child| Located { entry, child: Some(child) })
    })
}

/// Readable title from the last path segment, for pages outside the tree.
/// `/compliance/industry-approvals` becomes "Industry Approvals".
pub fn title_from_path(path: &str) -> String {
    let slug = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_top_level(route: &str) -> Vec<&'static str> {
        NAVIGATION
            .iter()
            .filter(|entry| entry.is_active(route))
            .map(|entry| entry.name)
            .collect()
    }

    #[test]
    fn test_exact_top_level_match_is_the_only_active_entry() {
        for entry in NAVIGATION {
            assert_eq!(active_top_level(entry.href), vec![entry.name]);
            let active = active_paths(entry.href, NAVIGATION);
            assert_eq!(active.len(), 1, "route {}", entry.href);
            assert!(active.contains(entry.href));
        }
    }

    #[test]
    fn test_child_route_marks_owner_active() {
        for entry in NAVIGATION {
            for item in entry.dropdown {
                assert_eq!(active_top_level(item.href), vec![entry.name]);
                let active = active_paths(item.href, NAVIGATION);
                assert!(active.contains(entry.href));
                assert!(active.contains(item.href));
            }
        }
    }

    #[test]
    fn test_environmental_standards_highlights_compliance() {
        let active = active_paths("/compliance/environmental-standards", NAVIGATION);
        assert!(active.contains("/compliance"));
        assert!(!active.contains("/"));
        assert_eq!(active_top_level("/compliance/environmental-standards"), vec!["Compliance"]);
    }

    #[test]
    fn test_custom_tree() {
        const TREE: &[NavEntry] = &[
            entry("Home", "/", &[]),
            entry(
                "Compliance",
                "/compliance",
                &[link("Environmental Standards", "/compliance/environmental-standards")],
            ),
        ];
        let active = active_paths("/compliance/environmental-standards", TREE);
        assert_eq!(active.len(), 2);
        assert!(active.contains("/compliance"));
        assert!(TREE[1].is_active("/compliance/environmental-standards"));
        assert!(!TREE[0].is_active("/compliance/environmental-standards"));
    }

    #[test]
    fn test_unknown_route_highlights_nothing() {
        assert!(active_paths("/nowhere", NAVIGATION).is_empty());
        // prefix is not a match
        assert!(active_paths("/compliance/industry-approvals", NAVIGATION).is_empty());
        assert!(active_paths("/compliance/", NAVIGATION).is_empty());
    }

    #[test]
    fn test_locate() {
        let found = locate("/capabilities/technical-expertise", NAVIGATION).unwrap();
        assert_eq!(found.entry.name, "Capabilities");
        assert_eq!(found.name(), "Technical Expertise");

        let found = locate("/manufacturing", NAVIGATION).unwrap();
        assert!(found.child.is_none());
        assert_eq!(found.name(), "Manufacturing");

        assert!(locate("/compliance/industry-approvals", NAVIGATION).is_none());
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path("/compliance/industry-approvals"), "Industry Approvals");
        assert_eq!(title_from_path("/products/"), "Products");
        assert_eq!(title_from_path("/"), "");
    }
}
