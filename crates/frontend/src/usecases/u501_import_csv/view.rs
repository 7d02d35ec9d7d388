use super::api::upload_csv;
use super::manual_entry::ManualEntry;
use super::state::{ImportState, UploadStatus};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::u501_import_csv::ImportArtifact;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

const TAB_CSV: &str = "csv";
const TAB_MANUAL: &str = "manual";

#[component]
pub fn ImportCsvPage() -> impl IntoView {
    let selected_tab = RwSignal::new(TAB_CSV.to_string());
    let state = RwSignal::new(ImportState::default());

    view! {
        <PageFrame page_id="u501_import_csv--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("upload")}
                    <h1 class="page__title">"Importação de Dados"</h1>
                </div>
            </div>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    <Tab value=TAB_CSV>"Importar CSV"</Tab>
                    <Tab value=TAB_MANUAL>"Inserção Manual"</Tab>
                </TabList>

                {move || {
                    if selected_tab.get() == TAB_MANUAL {
                        view! { <ManualEntry /> }.into_any()
                    } else {
                        view! {
                            <div class="import">
                                <p class="import__hint">
                                    "Siga a ordem abaixo para evitar erros de vínculo entre os dados."
                                </p>
                                <div class="import__grid">
                                    {ImportArtifact::ALL
                                        .into_iter()
                                        .map(|artifact| view! { <UploadCard artifact=artifact state=state /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn UploadCard(artifact: ImportArtifact, state: RwSignal<ImportState>) -> impl IntoView {
    let input_id = format!("csv-input-{}", artifact.code());
    let status = Signal::derive(move || state.with(|s| s.status(artifact)));
    let file_name = Signal::derive(move || {
        state.with(|s| s.slot(artifact).and_then(|slot| slot.file_name.clone()))
    });

    let start_upload = move |file: web_sys::File| {
        let Some(token) = state
            .try_update(|s| s.slot_mut(artifact).map(|slot| slot.begin(file.name())))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            let result = upload_csv(artifact, file).await.map_err(|e| e.to_string());
            if let Err(message) = &result {
                log::error!("Upload of {} failed: {}", artifact.code(), message);
            }
            let applied = state
                .try_update(|s| {
                    s.slot_mut(artifact)
                        .map(|slot| slot.finish(token, result))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale upload result for {}", artifact.code());
            }
        });
    };

    let on_reset = move |_| {
        state.update(|s| {
            if let Some(slot) = s.slot_mut(artifact) {
                slot.reset();
            }
        });
    };

    let label_for = input_id.clone();

    view! {
        <div class="import-card">
            <div class="import-card__header">
                <span class="import-card__step">{artifact.step()}</span>
                <h3 class="import-card__title">{format!("{}. {}", artifact.step(), artifact.title())}</h3>
            </div>
            <p class="import-card__description">
                {format!("Arquivo {}. {}", artifact.file_name(), artifact.dependency_hint())}
            </p>

            <input
                type="file"
                accept=".csv"
                style="display: none;"
                id=input_id
                disabled=move || status.get().is_uploading()
                on:change=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        start_upload(file);
                    }
                    // allow picking the same file again
                    input.set_value("");
                }
            />

            <Flex style="gap: 8px; align-items: center;">
                <label
                    for=label_for
                    class=move || {
                        if status.get().is_uploading() {
                            "import-card__select import-card__select--disabled"
                        } else {
                            "import-card__select"
                        }
                    }
                >
                    {move || {
                        if status.get().is_uploading() {
                            view! {
                                <Spinner size=SpinnerSize::Tiny />
                                <span>"Processando..."</span>
                            }.into_any()
                        } else {
                            view! {
                                {icon("file-text")}
                                <span>"Selecionar CSV"</span>
                            }.into_any()
                        }
                    }}
                </label>
                <Show when=move || !matches!(status.get(), UploadStatus::Idle | UploadStatus::Uploading)>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_reset>
                        {icon("x")}
                    </Button>
                </Show>
            </Flex>

            {move || {
                let current = status.get();
                let text = current.message()?;
                let (class, icon_name) = match current {
                    UploadStatus::Success { .. } => ("import-card__status import-card__status--success", "check-circle"),
                    _ => ("import-card__status import-card__status--error", "alert-circle"),
                };
                Some(view! {
                    <div class=class>
                        {icon(icon_name)}
                        <span>{text}</span>
                        {file_name.get().map(|name| view! { <span class="import-card__file">{name}</span> })}
                    </div>
                })
            }}
        </div>
    }
}
