use crate::constants::*;
use heart_core::{HeartFrame, HeartLayer, HeartVisual, LayerError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn layer_err(e: JsValue) -> LayerError {
    LayerError(format!("{:?}", e))
}

/// Hearts rendered as inline SVG elements inside the overlay container.
pub struct DomLayer {
    document: web::Document,
    container: web::HtmlElement,
}

impl DomLayer {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
        }
    }

    fn svg(&self, tag: &str) -> Result<web::Element, LayerError> {
        self.document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(layer_err)
    }
}

impl HeartLayer for DomLayer {
    type Node = web::SvgElement;

    fn create(&mut self, visual: &HeartVisual) -> Result<web::SvgElement, LayerError> {
        let heart = self
            .svg("svg")?
            .dyn_into::<web::SvgElement>()
            .map_err(|e| LayerError(format!("not an svg element: {:?}", e)))?;
        heart
            .set_attribute("viewBox", HEART_VIEW_BOX)
            .map_err(layer_err)?;
        heart.class_list().add_1(HEART_CLASS).map_err(layer_err)?;

        let path = self.svg("path")?;
        path.set_attribute("d", HEART_PATH).map_err(layer_err)?;
        path.set_attribute("fill", &visual.color).map_err(layer_err)?;
        heart.append_child(&path).map_err(layer_err)?;

        let style = heart.style();
        let size = format!("{:.2}px", visual.size);
        style.set_property("width", &size).map_err(layer_err)?;
        style.set_property("height", &size).map_err(layer_err)?;
        style
            .set_property("transform", &translate(visual.position.x, visual.position.y))
            .map_err(layer_err)?;
        Ok(heart)
    }

    fn append_batch(&mut self, nodes: &[web::SvgElement]) -> Result<(), LayerError> {
        if nodes.is_empty() {
            return Ok(());
        }
        let fragment = self.document.create_document_fragment();
        for node in nodes {
            fragment.append_child(node).map_err(layer_err)?;
        }
        self.container.append_child(&fragment).map_err(layer_err)?;
        Ok(())
    }

    fn update(&mut self, node: &web::SvgElement, frame: &HeartFrame) {
        let style = node.style();
        _ = style.set_property("transform", &translate(frame.position.x, frame.position.y));
        _ = style.set_property("opacity", &format!("{:.3}", frame.opacity));
    }

    fn remove(&mut self, node: &web::SvgElement) {
        node.remove();
    }

    fn count(&self) -> usize {
        self.container
            .get_elements_by_class_name(HEART_CLASS)
            .length() as usize
    }
}

#[inline]
fn translate(x: f64, y: f64) -> String {
    format!("translate({:.2}px, {:.2}px)", x, y)
}
