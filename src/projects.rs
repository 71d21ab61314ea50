use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: String,
}

impl ProjectDescriptor {
    /// The number printed on the project card, e.g. `01`.
    pub fn display_index(&self) -> String {
        format!("0{}", self.id)
    }
}

/// Pointer hover flag owned by a single project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }
}

/// Cards of the project gallery as `(display index, project)`, in input order.
pub fn gallery_entries(projects: &[ProjectDescriptor]) -> Vec<(String, &ProjectDescriptor)> {
    projects.iter().map(|p| (p.display_index(), p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, title: &str) -> ProjectDescriptor {
        ProjectDescriptor {
            id,
            title: title.to_string(),
            description: String::new(),
            technologies: vec!["Rust".to_string(), "Leptos".to_string()],
            github_url: format!("https://github.com/example/{title}"),
        }
    }

    #[test]
    fn test_gallery_keeps_order_and_ids() {
        let projects = vec![project(3, "c"), project(1, "a"), project(2, "b")];
        let entries = gallery_entries(&projects);

        assert_eq!(entries.len(), projects.len());
        let shown: Vec<(&str, &str)> = entries
            .iter()
            .map(|(index, p)| (index.as_str(), p.title.as_str()))
            .collect();
        assert_eq!(shown, vec![("03", "c"), ("01", "a"), ("02", "b")]);
    }

    #[test]
    fn test_empty_gallery() {
        assert!(gallery_entries(&[]).is_empty());
    }

    #[test]
    fn test_hover_state() {
        let mut hover = HoverState::default();
        assert!(!hover.is_hovered());
        hover.enter();
        assert!(hover.is_hovered());
        hover.enter();
        assert!(hover.is_hovered());
        hover.leave();
        assert!(!hover.is_hovered());
    }

    #[test]
    fn test_technologies_default_to_empty() {
        let p: ProjectDescriptor = serde_json::from_str(
            r#"{"id": 7, "title": "t", "description": "d", "github_url": "https://github.com/x/t"}"#,
        )
        .unwrap();
        assert!(p.technologies.is_empty());
        assert_eq!(p.display_index(), "07");
    }
}
