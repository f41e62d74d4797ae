//! Tool registry: third-party systems that can appear as connector nodes.
//!
//! The registry is consulted with tool names coming from saved settings and
//! URLs, so lookups return `None` instead of failing.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use serde::Serialize;

use super::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Display name, also the registry key.
    pub name: &'static str,
    pub icon_key: &'static str,
    pub category: Category,
}

const fn tool(name: &'static str, icon_key: &'static str, category: Category) -> Tool {
    Tool {
        name,
        icon_key,
        category,
    }
}

static TOOLS: &[Tool] = &[
    // Plan
    tool("Jira", "jira", Category::Plan),
    tool("Trello", "trello", Category::Plan),
    tool("Asana", "asana", Category::Plan),
    tool("Azure Boards", "azure-boards", Category::Plan),
    // Code
    tool("GitHub", "github", Category::Code),
    tool("GitLab", "gitlab", Category::Code),
    tool("Bitbucket", "bitbucket", Category::Code),
    tool("Azure Repos", "azure-repos", Category::Code),
    // Build
    tool("Jenkins", "jenkins", Category::Build),
    tool("GitHub Actions", "github-actions", Category::Build),
    tool("CircleCI", "circleci", Category::Build),
    tool("Maven", "maven", Category::Build),
    tool("Gradle", "gradle", Category::Build),
    // Test
    tool("Jest", "jest", Category::Test),
    tool("Selenium", "selenium", Category::Test),
    tool("Cypress", "cypress", Category::Test),
    tool("JUnit", "junit", Category::Test),
    tool("SonarQube", "sonarqube", Category::Test),
    // Release
    tool("Argo CD", "argocd", Category::Release),
    tool("Spinnaker", "spinnaker", Category::Release),
    tool("Octopus Deploy", "octopus", Category::Release),
    tool("Transport Management", "sap-tms", Category::Release),
    // Deploy
    tool("Kubernetes", "kubernetes", Category::Deploy),
    tool("Docker", "docker", Category::Deploy),
    tool("AWS", "aws", Category::Deploy),
    tool("Azure", "azure", Category::Deploy),
    tool("Cloud Foundry", "cloud-foundry", Category::Deploy),
    tool("SAP BTP", "sap-btp", Category::Deploy),
];

/// Tools offered in each category of the palette, in display order.
pub(crate) static CATEGORY_TOOLS: &[(Category, &[&str])] = &[
    (Category::Plan, &["Jira", "Trello", "Asana", "Azure Boards"]),
    (Category::Code, &["GitHub", "GitLab", "Bitbucket", "Azure Repos"]),
    (
        Category::Build,
        &["Jenkins", "GitHub Actions", "CircleCI", "Maven", "Gradle"],
    ),
    (
        Category::Test,
        &["Jest", "Selenium", "Cypress", "JUnit", "SonarQube"],
    ),
    (
        Category::Release,
        &["Argo CD", "Spinnaker", "Octopus Deploy", "Transport Management"],
    ),
    (
        Category::Deploy,
        &["Kubernetes", "Docker", "AWS", "Azure", "Cloud Foundry", "SAP BTP"],
    ),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static Tool>> =
    LazyLock::new(|| TOOLS.iter().map(|t| (t.name, t)).collect());

/// Look a tool up by its display name. Names are matched exactly.
pub fn lookup_tool(name: &str) -> Option<&'static Tool> {
    BY_NAME.get(name).copied()
}

/// Tool names offered for `category`, in declaration order.
pub fn tools_for_category(category: Category) -> &'static [&'static str] {
    CATEGORY_TOOLS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, names)| *names)
        .unwrap_or(&[])
}

/// Flatten a per-category tool selection into the set of enabled tool names.
///
/// Names are kept as given (unregistered names included) and deduplicated
/// across categories.
pub fn enabled_tools(selection: &HashMap<Category, Vec<String>>) -> BTreeSet<String> {
    selection.values().flatten().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_registered_tool() {
        let jenkins = lookup_tool("Jenkins").expect("Jenkins should be registered");
        assert_eq!(jenkins.category, Category::Build);
        assert_eq!(jenkins.icon_key, "jenkins");
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup_tool("jenkins").is_none());
        assert!(lookup_tool("").is_none());
        assert!(lookup_tool("Travis CI").is_none());
    }

    #[test]
    fn tools_for_category_keeps_declaration_order() {
        assert_eq!(
            tools_for_category(Category::Code),
            ["GitHub", "GitLab", "Bitbucket", "Azure Repos"]
        );
    }

    #[test]
    fn tool_names_are_unique() {
        assert_eq!(BY_NAME.len(), TOOLS.len());
    }

    #[test]
    fn enabled_tools_deduplicates_across_categories() {
        let mut selection = HashMap::new();
        selection.insert(Category::Build, vec!["Jenkins".to_string(), "Maven".to_string()]);
        selection.insert(Category::Deploy, vec!["Jenkins".to_string()]);
        let enabled = enabled_tools(&selection);
        assert_eq!(enabled.len(), 2);
        assert!(enabled.contains("Jenkins"));
        assert!(enabled.contains("Maven"));
    }

    #[test]
    fn enabled_tools_empty_selection() {
        assert!(enabled_tools(&HashMap::new()).is_empty());
    }
}
