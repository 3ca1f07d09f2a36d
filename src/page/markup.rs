//! Built-in board markup: the `app` host and the three component templates.

use crate::page::document::{Page, TemplateNode};

pub const APP_HOST: &str = "app";
pub const PROJECT_INPUT: &str = "project-input";
pub const PROJECT_LIST: &str = "project-list";
pub const SINGLE_PROJECT: &str = "single-project";

fn project_input() -> TemplateNode {
    TemplateNode::new("form")
        .child(
            TemplateNode::new("div")
                .with_class("form-control")
                .child(TemplateNode::new("label").with_text("Title"))
                .child(TemplateNode::new("input").with_id("title")),
        )
        .child(
            TemplateNode::new("div")
                .with_class("form-control")
                .child(TemplateNode::new("label").with_text("Description"))
                .child(TemplateNode::new("textarea").with_id("description")),
        )
        .child(
            TemplateNode::new("div")
                .with_class("form-control")
                .child(TemplateNode::new("label").with_text("People"))
                .child(TemplateNode::new("input").with_id("people")),
        )
        .child(TemplateNode::new("button").with_text("ADD PROJECT"))
}

fn project_list() -> TemplateNode {
    TemplateNode::new("section")
        .with_class("projects")
        .child(TemplateNode::new("header").child(TemplateNode::new("h2")))
        .child(TemplateNode::new("ul"))
}

fn single_project() -> TemplateNode {
    TemplateNode::new("li")
        .child(TemplateNode::new("h2"))
        .child(TemplateNode::new("h3"))
        .child(TemplateNode::new("p"))
}

impl Page {
    /// A page carrying the board's host container and templates.
    pub fn with_markup() -> Self {
        let page = Page::new();
        page.append_root(&TemplateNode::new("div").with_id(APP_HOST));
        page.define_template(PROJECT_INPUT, project_input());
        page.define_template(PROJECT_LIST, project_list());
        page.define_template(SINGLE_PROJECT, single_project());
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_has_host_and_templates() {
        let page = Page::with_markup();
        assert!(page.get_element_by_id(APP_HOST).is_some());

        let form = page.import_template(PROJECT_INPUT).unwrap();
        for field in ["#title", "#description", "#people"] {
            assert!(page.query_selector(form, field).is_some(), "missing {field}");
        }

        let list = page.import_template(PROJECT_LIST).unwrap();
        assert!(page.query_selector(list, "ul").is_some());
        assert!(page.query_selector(list, "h2").is_some());

        let card = page.import_template(SINGLE_PROJECT).unwrap();
        assert_eq!(page.tag(card).unwrap(), "li");
        assert_eq!(page.children(card).unwrap().len(), 3);
    }
}
