use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::category::{Category, CategoryRequest};
use crate::view::notice::{LONG_DURATION, Notice};
use crate::view::validation::validate_category;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Create,
    Edit(Category),
}

/// The create/edit category dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDialog {
    pub mode: DialogMode,
    pub name: String,
    pub description: String,
}

impl CategoryDialog {
    pub fn create() -> Self {
        CategoryDialog {
            mode: DialogMode::Create,
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn edit(category: Category) -> Self {
        CategoryDialog {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            mode: DialogMode::Edit(category),
        }
    }

    pub fn request(&self) -> Result<CategoryRequest, StudieHubError> {
        validate_category(&self.name)?;
        let description = self.description.trim();
        Ok(CategoryRequest {
            name: self.name.trim().to_string(),
            description: if description.is_empty() { None } else { Some(description.to_string()) },
            icon_url: None,
        })
    }
}

/// Category admin errors stay on screen longer than the default.
fn failure(err: StudieHubError, default: &str) -> Notice {
    let err = err.or_message(default);
    Notice::error(err.message).with_duration(LONG_DURATION)
}

#[derive(Debug, Clone, Default)]
pub struct CategoryAdmin {
    pub categories: Vec<Category>,
}

impl CategoryAdmin {
    pub async fn load(hub: &StudieHub) -> Result<Self, StudieHubError> {
        hub.require_admin()?;
        let categories = hub
            .get_all_categories()
            .await
            .map_err(|e| e.or_message("Failed to load categories"))?;
        Ok(CategoryAdmin { categories })
    }

    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub async fn submit(&mut self, hub: &StudieHub, dialog: &CategoryDialog) -> Notice {
        let request = match dialog.request() {
            Ok(request) => request,
            Err(err) => return Notice::error(err.message).with_duration(LONG_DURATION),
        };
        let result = match &dialog.mode {
            DialogMode::Create => hub
                .create_category(&request)
                .await
                .map(|_| Notice::success("Category created successfully"))
                .map_err(|e| failure(e, "Error creating category")),
            DialogMode::Edit(category) => hub
                .update_category(&category.id, &request)
                .await
                .map(|_| Notice::success("Category updated successfully"))
                .map_err(|e| failure(e, "Error updating category")),
        };
        match result {
            Ok(notice) => {
                self.reload(hub).await;
                notice
            }
            Err(notice) => notice,
        }
    }

    /// Soft delete; the backend refuses while courses still use the category.
    pub async fn delete(&mut self, hub: &StudieHub, id: &str) -> Notice {
        match hub.delete_category(id).await {
            Ok(_) => {
                self.reload(hub).await;
                Notice::success("Category deleted successfully")
            }
            Err(err) => failure(err, "Error deleting category"),
        }
    }

    pub async fn purge(&mut self, hub: &StudieHub, id: &str) -> Notice {
        match hub.purge_category(id).await {
            Ok(_) => {
                self.reload(hub).await;
                Notice::success("Category permanently deleted")
            }
            Err(err) => failure(err, "Error deleting category"),
        }
    }

    async fn reload(&mut self, hub: &StudieHub) {
        match hub.get_all_categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => log::warn!("Error reloading categories: {}", err),
        }
    }
}
