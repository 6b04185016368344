use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::ui::DomCommand;

/// Applies [`DomCommand`]s beneath the viewer's host element.
pub struct Dom {
    document: Document,
    host: Element,
}

impl Dom {
    pub fn new(document: Document, host: Element) -> Self {
        Self { document, host }
    }

    pub fn apply_all(&self, commands: Vec<DomCommand>) -> Result<(), JsValue> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    pub fn element(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
    }

    pub fn input(&self, id: &str) -> Result<HtmlInputElement, JsValue> {
        self.element(id)?.dyn_into::<HtmlInputElement>().map_err(Into::into)
    }

    fn apply(&self, command: DomCommand) -> Result<(), JsValue> {
        match command {
            DomCommand::CreatePanel { id, parent, class } => {
                let element = self.create("div", &id, parent.as_deref())?;
                element.set_class_name(class);
            }
            DomCommand::CreateLabel {
                id,
                parent,
                text,
                class,
            } => {
                let element = self.create("div", &id, parent.as_deref())?;
                element.set_class_name(class);
                element.set_text_content(Some(&text));
            }
            DomCommand::CreateInput {
                id,
                parent,
                initial_text,
                placeholder,
            } => {
                let input = self
                    .create("input", &id, parent.as_deref())?
                    .dyn_into::<HtmlInputElement>()?;
                input.set_type("text");
                input.set_placeholder(&placeholder);
                input.set_value(&initial_text);
            }
            DomCommand::CreateButton { id, parent, text } => {
                let button = self.create("button", &id, parent.as_deref())?;
                button.set_attribute("type", "button")?;
                button.set_text_content(Some(&text));
            }
            DomCommand::SetInputValue { id, text } => {
                let input = self.input(&id)?;
                if input.value() != text {
                    input.set_value(&text);
                }
            }
            DomCommand::SetText { id, text } => {
                self.element(&id)?.set_text_content(Some(&text));
            }
            DomCommand::SetVisible { id, visible } => {
                self.element(&id)?
                    .dyn_into::<HtmlElement>()?
                    .set_hidden(!visible);
            }
        }
        Ok(())
    }

    fn create(&self, tag: &str, id: &str, parent: Option<&str>) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_id(id);
        let parent = match parent {
            Some(parent_id) => self.element(parent_id)?,
            None => self.host.clone(),
        };
        parent.append_child(&element)?;
        Ok(element)
    }
}
