use crate::page::{Element, Page};

pub fn hide<P: Page + ?Sized>(page: &mut P) {
    page.set_visible(Element::Alert, false);
}

pub fn show<P: Page + ?Sized>(page: &mut P, message: &str) {
    page.set_text(Element::AlertMessage, message);
    page.set_visible(Element::Alert, true);
}
