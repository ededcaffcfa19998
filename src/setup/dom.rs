//! DOM side of the setup view: reveal the dialog and fill the similar-wizards
//! list from `#similar-wizard-template`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, DocumentFragment, Element, HtmlElement, HtmlTemplateElement, SvgElement, window,
};

use super::{WizardDescriptor, create_wizards, with_rng};
use crate::config::SetupConfig;
use crate::error::{Result, ViewError};

const DIALOG: &str = ".setup";
const SIMILAR_LIST: &str = ".setup-similar-list";
const SIMILAR_BLOCK: &str = ".setup-similar";
const TEMPLATE: &str = "#similar-wizard-template";
const LABEL: &str = ".setup-similar-label";
const COAT: &str = ".wizard-coat";
const EYES: &str = ".wizard-eyes";
const HIDDEN: &str = "hidden";

fn document() -> Result<Document> {
    window()
        .ok_or(ViewError::NoWindow)?
        .document()
        .ok_or(ViewError::NoDocument)
}

fn required(
    found: std::result::Result<Option<Element>, JsValue>,
    selector: &str,
) -> Result<Element> {
    found?.ok_or_else(|| ViewError::missing(selector))
}

/// Show the setup dialog with `count` freshly randomized wizards.
///
/// Each call appends another batch to the list; the host is expected to call
/// it once per dialog opening.
pub fn show_setup_view(config: &SetupConfig, count: usize) -> Result<()> {
    let doc = document()?;

    let dialog = required(doc.query_selector(DIALOG), DIALOG)?;
    dialog.class_list().remove_1(HIDDEN)?;

    let list = required(dialog.query_selector(SIMILAR_LIST), SIMILAR_LIST)?;
    let template: HtmlTemplateElement = required(doc.query_selector(TEMPLATE), TEMPLATE)?
        .dyn_into()
        .map_err(|_| ViewError::NotATemplate {
            selector: TEMPLATE.to_string(),
        })?;

    let wizards = with_rng(|rng| create_wizards(config, count, rng));
    let fragment = render_wizards_fragment(&doc, &template.content(), &wizards)?;
    list.append_child(&fragment)?;

    required(dialog.query_selector(SIMILAR_BLOCK), SIMILAR_BLOCK)?
        .class_list()
        .remove_1(HIDDEN)?;

    log::debug!("setup view shown with {} wizards", wizards.len());
    Ok(())
}

/// Render every wizard into one fragment so the list is touched once.
pub fn render_wizards_fragment(
    doc: &Document,
    template: &DocumentFragment,
    wizards: &[WizardDescriptor],
) -> Result<DocumentFragment> {
    let fragment = doc.create_document_fragment();
    for wizard in wizards {
        let element = render_wizard(template, wizard)?;
        fragment.append_child(&element)?;
    }
    Ok(fragment)
}

/// Deep-clone the template and fill in name and colors.
pub fn render_wizard(template: &DocumentFragment, model: &WizardDescriptor) -> Result<DocumentFragment> {
    let element: DocumentFragment = template
        .clone_node_with_deep(true)?
        .dyn_into()
        .map_err(|_| ViewError::NotATemplate {
            selector: TEMPLATE.to_string(),
        })?;

    required(element.query_selector(LABEL), LABEL)?.set_text_content(Some(&model.name));
    set_fill(&required(element.query_selector(COAT), COAT)?, &model.coat_color)?;
    set_fill(&required(element.query_selector(EYES), EYES)?, &model.eyes_color)?;

    Ok(element)
}

// The coat and eyes are SVG shapes in the stock markup, but accept plain
// HTML elements too.
fn set_fill(element: &Element, color: &str) -> Result<()> {
    if let Some(svg) = element.dyn_ref::<SvgElement>() {
        svg.style().set_property("fill", color)?;
    } else if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property("fill", color)?;
    } else {
        element.set_attribute("fill", color)?;
    }
    Ok(())
}
