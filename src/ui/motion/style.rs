//! Inline style writes for animated elements

use web_sys::HtmlElement;

use crate::core::reveal::{Pose, Rgb, css_number};

pub fn set_pose(element: &HtmlElement, pose: &Pose) {
    let style = element.style();
    let _ = style.set_property("opacity", &pose.opacity_css());
    let _ = style.set_property("transform", &pose.transform_css());
}

pub fn set_transition(element: &HtmlElement, transition: &str) {
    let _ = element.style().set_property("transition", transition);
}

pub fn set_background(element: &HtmlElement, color: Rgb) {
    let _ = element
        .style()
        .set_property("background-color", &color.to_string());
}

pub fn set_translate_x(element: &HtmlElement, x: f64) {
    let transform = if x == 0.0 {
        "none".to_string()
    } else {
        format!("translate3d({}px, 0px, 0px)", css_number(x))
    };
    let _ = element.style().set_property("transform", &transform);
}

pub fn set_height(element: &HtmlElement, height: Option<f64>) {
    let style = element.style();
    let _ = match height {
        Some(px) => style.set_property("height", &format!("{}px", css_number(px))),
        None => style.remove_property("height").map(|_| ()),
    };
}
