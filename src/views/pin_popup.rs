// ============================================================================
// PIN POPUP - Tarjeta de un pin existente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Pin;
use crate::utils::constants::POPUP_CONTENT_ID;
use crate::utils::time_ago::time_ago;

/// Renderizar la tarjeta del pin seleccionado
pub fn render_pin_popup(pin: &Pin) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card")
        .id(POPUP_CONTENT_ID)?
        .build();

    append_child(&card, &label("Place")?)?;
    let title = ElementBuilder::new("h4")?
        .class("place")
        .text(&pin.title)
        .build();
    append_child(&card, &title)?;

    append_child(&card, &label("Review")?)?;
    let desc = ElementBuilder::new("p")?
        .class("desc")
        .text(&pin.desc)
        .build();
    append_child(&card, &desc)?;

    append_child(&card, &label("Rating")?)?;
    append_child(&card, &render_stars(pin.rating)?)?;

    append_child(&card, &label("Information")?)?;

    let username = ElementBuilder::new("span")?
        .class("username")
        .text("Created by ")
        .build();
    let author = ElementBuilder::new("b")?
        .text(&pin.username)
        .build();
    append_child(&username, &author)?;
    append_child(&card, &username)?;

    let date = ElementBuilder::new("span")?
        .class("date")
        .text(&time_ago(pin.created_at))
        .build();
    append_child(&card, &date)?;

    Ok(card)
}

/// Una estrella por punto de rating (ninguna para rating 0)
fn render_stars(rating: u8) -> Result<Element, JsValue> {
    let stars = ElementBuilder::new("div")?
        .class("stars")
        .build();

    for _ in 0..rating {
        let star = ElementBuilder::new("span")?
            .class("star")
            .text("★")
            .build();
        append_child(&stars, &star)?;
    }

    Ok(stars)
}

fn label(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?.text(text).build())
}
