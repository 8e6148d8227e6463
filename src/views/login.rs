// ============================================================================
// LOGIN VIEW - Formulario de login
// ============================================================================
// Colaborador fino: postea credenciales al backend y persiste el username.
// El estado local del formulario vive en closures (Rc<RefCell>), no en la
// ViewState: re-renderizar en cada tecla destruiría el foco.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, InputEvent, MouseEvent};

use crate::dom::{append_child, create_element, on_click, on_input, on_submit, set_attribute, set_class_name, set_text_content, ElementBuilder};
use crate::state::{AppState, ViewEvent};
use crate::viewmodels::SessionViewModel;

/// Renderizar el panel de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?
        .class("auth-panel login-panel")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Login")
        .build();
    append_child(&panel, &title)?;

    // Estado local del formulario
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    append_child(&form, &text_input("text", "username", username.clone())?)?;
    append_child(&form, &text_input("password", "password", password.clone())?)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("auth-submit")
        .attr("type", "submit")?
        .text("Login")
        .build();
    append_child(&form, &submit_btn)?;

    let error_msg = ElementBuilder::new("span")?
        .class("failure")
        .build();
    append_child(&form, &error_msg)?;

    // Submit
    {
        let username = username.clone();
        let password = password.clone();
        let error_msg = error_msg.clone();
        let state_clone = state.clone();

        on_submit(&form, move |e: Event| {
            e.prevent_default();

            let username_val = username.borrow().clone();
            let password_val = password.borrow().clone();

            if username_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_msg, "Please fill in all fields");
                return;
            }

            let error_msg = error_msg.clone();
            let state_async = state_clone.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.login(username_val, password_val).await {
                    Ok(user) => {
                        log::info!("✅ Login exitoso: {}", user);
                        state_async.apply(ViewEvent::LoggedIn(user));
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        set_text_content(&error_msg, "Something went wrong!");
                    }
                }
            });
        })?;
    }

    append_child(&panel, &form)?;

    // Botón de cierre
    let close_btn = ElementBuilder::new("button")?
        .class("auth-close")
        .attr("type", "button")?
        .text("×")
        .build();
    let state_clone = state.clone();
    on_click(&close_btn, move |_: MouseEvent| {
        state_clone.apply(ViewEvent::LoginToggled);
    })?;
    append_child(&panel, &close_btn)?;

    Ok(panel)
}

fn text_input(input_type: &str, placeholder: &str, value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "placeholder", placeholder)?;

    on_input(&input, move |e: InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    })?;

    Ok(input)
}
