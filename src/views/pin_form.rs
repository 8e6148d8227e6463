// ============================================================================
// PIN FORM - Formulario del borrador de pin
// ============================================================================
// Los cambios de campo mutan el borrador en el estado sin re-render (el
// re-render destruiría el foco del input). El submit lanza exactamente un
// request de creación; si falla, el borrador queda abierto para reintentar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};

use crate::dom::{append_child, create_element, on_change, on_input, on_submit, set_attribute, set_class_name, set_text_content, ElementBuilder};
use crate::state::{AppState, PinDraft, ViewEvent};
use crate::utils::constants::POPUP_CONTENT_ID;
use crate::viewmodels::PinViewModel;

/// Renderizar el formulario del borrador activo
pub fn render_pin_form(state: &AppState, draft: &PinDraft) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id(POPUP_CONTENT_ID)?
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "pin-form");

    append_child(&form, &label("Title")?)?;
    append_child(&form, &title_input(state, draft)?)?;

    append_child(&form, &label("Review")?)?;
    append_child(&form, &desc_textarea(state, draft)?)?;

    append_child(&form, &label("Rating")?)?;
    append_child(&form, &rating_select(state, draft)?)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("submitButton")
        .attr("type", "submit")?
        .text("Add Pin")
        .build();
    append_child(&form, &submit_btn)?;

    // Submit: un único request de creación con {username de sesión + borrador}
    {
        let state_clone = state.clone();
        on_submit(&form, move |e: Event| {
            e.prevent_default();

            let snapshot = state_clone.snapshot();
            let username = match snapshot.session.clone() {
                Some(user) => user,
                None => {
                    log::warn!("⚠️ Submit sin sesión activa, ignorado");
                    return;
                }
            };
            let draft = match snapshot.draft() {
                Some(d) => d.clone(),
                None => return,
            };

            let state_async = state_clone.clone();
            spawn_local(async move {
                let vm = PinViewModel::new();
                match vm.submit_draft(&username, &draft).await {
                    Ok(pin) => {
                        // Éxito: agregar el pin devuelto y cerrar el borrador
                        state_async.apply(ViewEvent::PinCreated(pin));
                    }
                    Err(e) => {
                        // El borrador queda abierto para reintentar manualmente
                        log::error!("❌ Error creando pin: {}", e);
                    }
                }
            });
        })?;
    }

    append_child(&container, &form)?;
    Ok(container)
}

fn title_input(state: &AppState, draft: &PinDraft) -> Result<Element, JsValue> {
    let input = create_element("input")?;
    set_attribute(&input, "placeholder", "Enter a title")?;
    set_attribute(&input, "value", &draft.title)?;

    let state_clone = state.clone();
    on_input(&input, move |e: InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            state_clone.apply_silent(ViewEvent::DraftTitleChanged(target.value()));
        }
    })?;

    Ok(input)
}

fn desc_textarea(state: &AppState, draft: &PinDraft) -> Result<Element, JsValue> {
    let textarea = create_element("textarea")?;
    set_attribute(&textarea, "placeholder", "Say something about this place.")?;
    set_text_content(&textarea, &draft.desc);

    let state_clone = state.clone();
    on_input(&textarea, move |e: InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
            state_clone.apply_silent(ViewEvent::DraftDescChanged(target.value()));
        }
    })?;

    Ok(textarea)
}

/// Select restringido a {1..5}; un borrador nunca tocado se queda en 0
fn rating_select(state: &AppState, draft: &PinDraft) -> Result<Element, JsValue> {
    let select = create_element("select")?;

    for value in 1..=5u8 {
        let option = create_element("option")?;
        set_attribute(&option, "value", &value.to_string())?;
        set_text_content(&option, &value.to_string());
        if value == draft.rating {
            set_attribute(&option, "selected", "selected")?;
        }
        append_child(&select, &option)?;
    }

    let state_clone = state.clone();
    on_change(&select, move |e: Event| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
            if let Ok(rating) = target.value().parse::<u8>() {
                state_clone.apply_silent(ViewEvent::DraftRatingChanged(rating));
            }
        }
    })?;

    Ok(select)
}

fn label(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?.text(text).build())
}
