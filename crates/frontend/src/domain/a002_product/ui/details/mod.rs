pub mod model;

use self::model::{parse_category_id, EditSession, ProductDraft, SaveBlocked};
use crate::domain::a002_product::api::update_product;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Edit-in-place dialog for one catalog row.
///
/// Opens whenever `editing` holds a product. The dialog cannot be dismissed
/// while a save is in flight.
#[component]
pub fn ProductEditDialog(
    editing: RwSignal<Option<Product>>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = RwSignal::new(EditSession::default());
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let saving = Signal::derive(move || session.with(|s| s.saving));
    let error = Signal::derive(move || session.with(|s| s.error.clone()));

    Effect::new(move |_| {
        if let Some(product) = editing.get() {
            let draft = ProductDraft::from_product(&product);
            name.set(draft.name);
            price.set(draft.price);
            category.set(
                draft
                    .category_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            );
            session.update(|s| s.open(&product));
            open.set(true);
        }
    });

    // Dismissing the dialog discards the draft
    Effect::new(move |_| {
        if open.get() {
            return;
        }
        let closed = session.try_update(|s| s.close()).unwrap_or(true);
        if closed {
            editing.set(None);
        } else {
            open.set(true);
        }
    });

    let save = move |_| {
        let edited = ProductDraft {
            id: None,
            name: name.get_untracked(),
            price: price.get_untracked(),
            category_id: parse_category_id(&category.get_untracked()),
        };
        let (id, payload) = match session.try_update(|s| s.begin_save(edited)) {
            Some(Ok(request)) => request,
            Some(Err(SaveBlocked::Invalid(e))) => {
                log::debug!("Product draft rejected: {}", e);
                return;
            }
            Some(Err(_)) | None => return,
        };

        spawn_local(async move {
            let result = update_product(id, &payload).await.map(|_| ());
            if let Err(e) = &result {
                log::warn!("Failed to update product {}: {}", id, e);
            }
            let refetch = session
                .try_update(|s| s.finish_save(result.map_err(|e| e.to_string())))
                .unwrap_or(false);
            if refetch {
                log::info!("Product {} updated", id);
                open.set(false);
                on_saved.run(());
            }
        });
    };

    view! {
        <Dialog
            open=open
            mask_closeable=Signal::derive(move || !saving.get())
            close_on_esc=false
        >
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Editar Produto"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            {move || error.get().map(|err| view! {
                                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
                            })}
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Nome"</Label>
                                <Input value=name />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Preço (R$)"</Label>
                                <Input value=price placeholder="0,00" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Categoria"</Label>
                                <Select value=category>
                                    <option value="">"Selecione..."</option>
                                    {move || categories.get().into_iter().map(|c| {
                                        view! { <option value=c.id.to_string()>{c.name}</option> }
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
