//! Materialize view nodes as yew markup

use hbnb_frontend_common::ViewNode;
use yew::prelude::*;
use yew::virtual_dom::{VTag, VText};

pub fn render_node(node: &ViewNode) -> Html {
    match node {
        ViewNode::Text(text) => VText::new(text.clone()).into(),
        ViewNode::Element(element) => {
            let mut tag = VTag::new(element.tag);
            if let Some(class) = element.class {
                tag.add_attribute("class", class);
            }
            for (name, value) in &element.attributes {
                tag.add_attribute(*name, value.clone());
            }
            if let Some(visible) = element.visible {
                tag.add_attribute("style", display_style(visible));
            }
            tag.add_children(element.children.iter().map(render_node));
            tag.into()
        }
    }
}

/// Render a region; nothing at all until it has been filled once
pub fn render_region(nodes: Option<&[ViewNode]>) -> Html {
    nodes
        .map(|nodes| nodes.iter().map(render_node).collect::<Html>())
        .unwrap_or_default()
}

pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

/// Inline style for an affordance toggled by the auth gate
pub fn affordance_style(visible: Option<bool>) -> Option<&'static str> {
    visible.map(display_style)
}
