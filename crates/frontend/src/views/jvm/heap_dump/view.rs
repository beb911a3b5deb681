use super::state::{format_bytes, suppresses_key, ActionOutcome, HeapDumpAction};
use super::view_model::HeapDumpViewModel;
use crate::shared::config::ConsoleConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HeapDumpView() -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig context not found");
    let vm = HeapDumpViewModel::new(config.backend.base_path.clone());
    vm.load_defaults();

    let running = move |action| vm.form.with(|f| f.running == Some(action));
    let busy = Signal::derive(move || vm.form.with(|f| f.is_running()));

    view! {
        <div class="heap-dump">
            {move || {
                vm.form
                    .with(|f| f.loading_error.clone())
                    .map(|e| view! { <div class="warning-box text-error">{e}</div> })
            }}

            <form class="detail-form" on:submit=|ev| ev.prevent_default()>
                <div class="form__group">
                    <label class="form__label" for="directory">"Directory"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="directory"
                        prop:value=move || vm.form.with(|f| f.directory.clone())
                        disabled=move || !vm.form.with(|f| f.loaded)
                        on:input=move |ev| vm.set_directory(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if suppresses_key(&ev.key()) {
                                ev.prevent_default();
                            }
                        }
                    />
                </div>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        loading=Signal::derive(move || running(HeapDumpAction::CheckDiskSpace))
                        on_click=move |_| vm.check_disk_space_command()
                    >
                        "Check disk space"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        loading=Signal::derive(move || running(HeapDumpAction::DumpHeap))
                        on_click=move |_| vm.dump_heap_command()
                    >
                        "Dump heap"
                    </Button>
                </Flex>
            </form>

            {move || {
                vm.form
                    .with(|f| f.outcome.clone())
                    .map(|outcome| match outcome {
                        ActionOutcome::Resolved(message) => {
                            view! { <div class="info-box text-success">{message}</div> }.into_any()
                        }
                        ActionOutcome::Rejected(message) => {
                            view! { <div class="warning-box text-error">{message}</div> }.into_any()
                        }
                    })
            }}

            {move || {
                vm.form
                    .with(|f| f.disk_space.clone())
                    .map(|space| {
                        view! {
                            <div class="heap-dump__result">
                                "Available disk space: "
                                {format_bytes(space.available_disk_space)}
                            </div>
                        }
                    })
            }}

            {move || {
                vm.form
                    .with(|f| f.heap_dump.clone())
                    .map(|file| {
                        view! {
                            <div class="heap-dump__result">
                                <div>"Heap dump file: " {file.filename}</div>
                                <div>"Size: " {format_bytes(file.size)}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
