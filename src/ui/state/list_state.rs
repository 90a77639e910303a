use dioxus::prelude::*;

use crate::domain::entities::record::Record;
use crate::ui::state::table_state::ChangeLog;
use crate::usecase::services::list_service::{ListController, ListService};

/// Owns a list controller for the calling component: fetches once on mount
/// and refetches whenever a watched resource shows up in the change log.
pub fn use_remote_list<R: Record>(
    service: ListService<R>,
    init: impl FnOnce() -> ListController<R>,
) -> (Signal<ListController<R>>, Callback<()>) {
    let mut controller = use_signal(init);
    let reload = use_callback(move |_: ()| {
        let ticket = controller.write().begin();
        let window = controller.peek().window();
        let service = service.clone();
        spawn(async move {
            let result = service.fetch(window).await;
            controller.write().finish(ticket, result);
        });
    });

    use_effect(move || reload.call(()));

    let changes = use_context::<Signal<ChangeLog>>();
    let mut seen = use_signal(|| changes.peek().sequence());
    use_effect(move || {
        let log = changes.read();
        let last_seen = *seen.peek();
        if log.sequence() == last_seen {
            return;
        }
        let refetch = {
            let list = controller.peek();
            log.lost_since(last_seen)
                || log.since(last_seen).any(|event| list.on_change(event))
        };
        seen.set(log.sequence());
        if refetch {
            reload.call(());
        }
    });

    (controller, reload)
}
