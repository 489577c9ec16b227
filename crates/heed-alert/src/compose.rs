use std::rc::Rc;

use heed_core::{effect, remember, remember_with_key, signal};

use crate::{AlertController, AlertSlot};

/// An empty slot that survives composition passes.
pub fn remember_alert_slot() -> Rc<AlertSlot> {
    remember(|| signal(None))
}

/// A controller bound to this call-site, attached to `slot` on the first
/// pass. Later passes return the same controller even if handed another
/// slot. Disposing the surrounding scope detaches it.
pub fn remember_alert(slot: &AlertSlot) -> Rc<AlertController> {
    let slot = slot.clone();
    remember(move || attach(&slot))
}

/// Like [`remember_alert`], but found by `key` instead of call order, so it
/// survives conditional branches that skip or add other remembered values.
pub fn remember_alert_with_key(key: impl Into<String>, slot: &AlertSlot) -> Rc<AlertController> {
    let key = format!("alert:{}", key.into());
    let slot = slot.clone();
    remember_with_key(key, move || attach(&slot))
}

fn attach(slot: &AlertSlot) -> AlertController {
    let controller = AlertController::new(slot);
    effect({
        let subscription = controller.subscription();
        move || subscription
    });
    controller
}
