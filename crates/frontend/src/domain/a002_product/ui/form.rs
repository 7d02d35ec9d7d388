use crate::domain::a001_category::ui::FormFeedback;
use crate::domain::a002_product::api::create_product;
use crate::domain::a002_product::ui::details::model::{parse_category_id, ProductDraft};
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn product_feedback(result: &Result<Product, ApiError>) -> FormFeedback {
    match result {
        Ok(_) => FormFeedback::Success("Produto criado com sucesso!".to_string()),
        Err(ApiError::Network(_)) => FormFeedback::Failure("Erro de conexão.".to_string()),
        Err(_) => FormFeedback::Failure("Erro ao criar produto.".to_string()),
    }
}

/// Form for `POST /products/`.
#[component]
pub fn ProductForm(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (feedback, set_feedback) = signal::<Option<FormFeedback>>(None);

    let submit = move |_| {
        let draft = ProductDraft {
            id: None,
            name: name.get_untracked(),
            price: price.get_untracked(),
            category_id: parse_category_id(&category.get_untracked()),
        };
        let payload = match draft.to_payload() {
            Ok(p) => p,
            Err(e) => {
                set_feedback.set(Some(FormFeedback::Failure(e.to_string())));
                return;
            }
        };

        set_submitting.set(true);
        set_feedback.set(None);
        spawn_local(async move {
            let result = create_product(&payload).await;
            if let Err(e) = &result {
                log::warn!("Failed to create product {:?}: {}", payload.name, e);
            }
            set_feedback.set(Some(product_feedback(&result)));
            if result.is_ok() {
                name.set(String::new());
                price.set(String::new());
                category.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="manual-form">
            <h3 class="manual-form__title">"Novo Produto"</h3>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Nome do produto"</Label>
                <Input value=name placeholder="Ex.: Café 500g" />
                <Label>"Preço (R$)"</Label>
                <Input value=price placeholder="0,00" />
                <Label>"Categoria"</Label>
                <Select value=category>
                    <option value="">"Selecione..."</option>
                    {move || categories.get().into_iter().map(|c| {
                        view! { <option value=c.id.to_string()>{c.name}</option> }
                    }).collect_view()}
                </Select>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Salvando..." } else { "Cadastrar Produto" }}
                </Button>
                {move || feedback.get().map(|f| view! {
                    <MessageBar intent=f.intent()>{f.text()}</MessageBar>
                })}
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_feedback() {
        let created = Ok(Product {
            id: 3,
            name: "Sabão".to_string(),
            price: 4.5,
            category_id: 2,
            category: None,
        });
        assert_eq!(
            product_feedback(&created),
            FormFeedback::Success("Produto criado com sucesso!".to_string())
        );
        let failed = Err(ApiError::Status {
            status: 422,
            detail: None,
        });
        assert_eq!(
            product_feedback(&failed),
            FormFeedback::Failure("Erro ao criar produto.".to_string())
        );

        let offline = Err(ApiError::Network("Failed to fetch".to_string()));
        assert_eq!(
            product_feedback(&offline),
            FormFeedback::Failure("Erro de conexão.".to_string())
        );
    }
}
