use crate::domain::a001_category::api::create_category;
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_category::{Category, CreateCategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Outcome banner of the last submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFeedback {
    Success(String),
    Failure(String),
}

impl FormFeedback {
    pub fn intent(&self) -> MessageBarIntent {
        match self {
            FormFeedback::Success(_) => MessageBarIntent::Success,
            FormFeedback::Failure(_) => MessageBarIntent::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormFeedback::Success(_))
    }

    pub fn text(&self) -> String {
        match self {
            FormFeedback::Success(t) | FormFeedback::Failure(t) => t.clone(),
        }
    }
}

fn category_created(name: &str) -> FormFeedback {
    FormFeedback::Success(format!("Categoria \"{}\" criada com sucesso!", name))
}

/// Feedback for creating `requested`. Any 2xx counts as created, even when
/// the body does not decode.
pub fn category_feedback(requested: &str, result: &Result<Category, ApiError>) -> FormFeedback {
    match result {
        Ok(category) => category_created(&category.name),
        Err(ApiError::Decode(_)) => category_created(requested),
        Err(ApiError::Network(_)) => FormFeedback::Failure("Erro de conexão.".to_string()),
        Err(_) => FormFeedback::Failure("Categoria já cadastrada.".to_string()),
    }
}

/// Single-field form for `POST /categories/`.
#[component]
pub fn CategoryForm(
    /// Fired after a category is created, so sibling forms can reload their lists
    #[prop(optional)]
    on_created: Option<Callback<()>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (feedback, set_feedback) = signal::<Option<FormFeedback>>(None);

    let submit = move |_| {
        let Some(dto) = CreateCategoryDto::from_input(&name.get_untracked()) else {
            return;
        };
        set_submitting.set(true);
        set_feedback.set(None);
        spawn_local(async move {
            let result = create_category(&dto).await;
            if let Err(e) = &result {
                log::warn!("Failed to create category {:?}: {}", dto.name, e);
            }
            let feedback = category_feedback(&dto.name, &result);
            if feedback.is_success() {
                name.set(String::new());
                if let Some(cb) = on_created {
                    cb.run(());
                }
            }
            set_feedback.set(Some(feedback));
            set_submitting.set(false);
        });
    };

    view! {
        <div class="manual-form">
            <h3 class="manual-form__title">"Nova Categoria"</h3>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Nome da categoria"</Label>
                <Input value=name placeholder="Ex.: Bebidas" />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || submitting.get() || name.get().trim().is_empty())
                >
                    {move || if submitting.get() { "Salvando..." } else { "Cadastrar Categoria" }}
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
    fn test_category_feedback() {
        let ok = Ok(Category {
            id: 1,
            name: "Bebidas".to_string(),
        });
        assert_eq!(
            category_feedback("Bebidas", &ok),
            FormFeedback::Success("Categoria \"Bebidas\" criada com sucesso!".to_string())
        );

        let duplicate = Err(ApiError::Status {
            status: 400,
            detail: Some("Category already exists".to_string()),
        });
        assert_eq!(
            category_feedback("Bebidas", &duplicate),
            FormFeedback::Failure("Categoria já cadastrada.".to_string())
        );

        let offline = Err(ApiError::Network("Failed to fetch".to_string()));
        assert_eq!(
            category_feedback("Bebidas", &offline),
            FormFeedback::Failure("Erro de conexão.".to_string())
        );
    }

    #[test]
    fn test_undecodable_2xx_counts_as_created() {
        let created = Err(ApiError::Decode("missing field `id`".to_string()));
        let feedback = category_feedback("Limpeza", &created);
        assert!(feedback.is_success());
        assert_eq!(
            feedback.text(),
            "Categoria \"Limpeza\" criada com sucesso!"
        );
    }
}
