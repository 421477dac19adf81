//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tower_sessions::Session;
use tracing::instrument;

use bluebox_core::UserType;

use crate::{
    components::{
        ChartGeometry, DataTableConfig, LineChartView, NavItem, StatCard, dashboard_stat_cards,
        growth_chart, sidebar_nav, users_table_config,
    },
    error::AppError,
    filters,
    middleware::load_form,
    models::{FormField, FormSession, User},
    state::AppState,
};

/// User row view for templates.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub joined: String,
    pub status: String,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.to_string(),
            user_type: user.user_type.to_string(),
            joined: user.joined.to_string(),
            status: user.status.to_string(),
        }
    }
}

/// An `<option>` of the user type selector.
#[derive(Debug, Clone)]
pub struct SelectOptionView {
    pub value: &'static str,
    pub selected: bool,
}

/// User modal view for templates.
#[derive(Debug, Clone)]
pub struct UserModalView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub name: String,
    pub email: String,
    pub user_type_options: Vec<SelectOptionView>,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub user_type_error: Option<String>,
}

impl UserModalView {
    /// Build the modal view, or `None` when the modal is closed.
    #[must_use]
    pub fn from_form(form: &FormSession) -> Option<Self> {
        if !form.is_open() {
            return None;
        }

        let (title, submit_label) = if form.editing_target().is_some() {
            ("Edit User", "Save Changes")
        } else {
            ("Add New User", "Add User")
        };

        let draft = form.draft();
        let errors = form.errors();
        let error_for = |field| errors.get(field).map(ToString::to_string);

        Some(Self {
            title,
            submit_label,
            name: draft.name.clone(),
            email: draft.email.clone(),
            user_type_options: UserType::SELECTOR_ORDER
                .into_iter()
                .map(|user_type| SelectOptionView {
                    value: user_type.as_str(),
                    selected: draft.user_type == Some(user_type),
                })
                .collect(),
            name_error: error_for(FormField::Name),
            email_error: error_for(FormField::Email),
            user_type_error: error_for(FormField::UserType),
        })
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub nav: Vec<NavItem>,
    pub stat_cards: Vec<StatCard>,
    pub chart: LineChartView,
    pub table: DataTableConfig,
    pub users: Vec<UserRowView>,
    pub modal: Option<UserModalView>,
}

/// Dashboard page handler.
#[instrument(skip(state, session))]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let form = load_form(&session).await?;

    let users: Vec<UserRowView> = {
        let registry = state.registry().read().await;
        registry.list().iter().map(UserRowView::from).collect()
    };

    let template = DashboardTemplate {
        current_path: "/".to_string(),
        nav: sidebar_nav(),
        stat_cards: dashboard_stat_cards().to_vec(),
        chart: growth_chart().render(&ChartGeometry::default()),
        table: users_table_config(),
        users,
        modal: UserModalView::from_form(&form),
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bluebox_core::{Email, JoinDate, UserId, UserStatus};

    use crate::models::form::EMAIL_INVALID;

    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(3),
            name: "Ron Kiperman".to_string(),
            email: Email::parse("ronkiperman@gmail.com").unwrap(),
            user_type: UserType::Subscriber,
            joined: JoinDate::from_ymd(2024, 4, 25).unwrap(),
            status: UserStatus::Approved,
        }
    }

    #[test]
    fn test_row_view() {
        let row = UserRowView::from(&sample_user());
        assert_eq!(row.id, "3");
        assert_eq!(row.user_type, "Subscriber");
        assert_eq!(row.joined, "25 Apr 2024");
        assert_eq!(row.status, "APPROVED");
    }

    #[test]
    fn test_closed_form_has_no_modal() {
        assert!(UserModalView::from_form(&FormSession::default()).is_none());
    }

    #[test]
    fn test_create_modal_labels_and_default_selection() {
        let mut form = FormSession::default();
        form.open_for_create();
        let modal = UserModalView::from_form(&form).unwrap();

        assert_eq!(modal.title, "Add New User");
        assert_eq!(modal.submit_label, "Add User");
        let values: Vec<_> = modal.user_type_options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["Subscriber", "Editor", "Admin"]);
        let selected: Vec<_> = modal
            .user_type_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, ["Subscriber"]);
    }

    #[test]
    fn test_edit_modal_prefilled() {
        let mut form = FormSession::default();
        form.open_for_edit(&sample_user());
        let modal = UserModalView::from_form(&form).unwrap();

        assert_eq!(modal.title, "Edit User");
        assert_eq!(modal.submit_label, "Save Changes");
        assert_eq!(modal.name, "Ron Kiperman");
        assert_eq!(modal.email, "ronkiperman@gmail.com");
    }

    #[test]
    fn test_modal_carries_errors() {
        let mut registry = crate::db::UserRegistry::new();
        let mut form = FormSession::default();
        form.open_for_create();
        form.update_field(FormField::Name, "Ada");
        form.update_field(FormField::Email, "bad");
        form.submit(&mut registry);

        let modal = UserModalView::from_form(&form).unwrap();
        assert_eq!(modal.email_error.as_deref(), Some(EMAIL_INVALID));
        assert!(modal.name_error.is_none());
        assert!(modal.user_type_error.is_none());
        assert_eq!(modal.email, "bad");
    }

    #[test]
    fn test_template_renders_rows_and_modal() {
        let mut form = FormSession::default();
        form.open_for_create();

        let template = DashboardTemplate {
            current_path: "/".to_string(),
            nav: sidebar_nav(),
            stat_cards: dashboard_stat_cards().to_vec(),
            chart: growth_chart().render(&ChartGeometry::default()),
            table: users_table_config(),
            users: vec![UserRowView::from(&sample_user())],
            modal: UserModalView::from_form(&form),
        };

        let html = template.render().unwrap();
        assert!(html.contains("Ron Kiperman"));
        assert!(html.contains("action=\"/users/3/status\""));
        assert!(html.contains("action=\"/users/3/edit\""));
        assert!(html.contains("Add New User"));
        assert!(html.contains("$150000"));
        assert!(html.contains("Growth Overview"));
        assert!(html.contains("Search Project..."));
    }
}
