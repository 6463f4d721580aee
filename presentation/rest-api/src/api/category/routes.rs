use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::get_children::{
    GetCategoryChildrenParams, GetCategoryChildrenUseCase,
};
use business::domain::category::use_cases::get_main::GetMainCategoriesUseCase;
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

use crate::api::category::dto::{CategoryRequest, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product::dto::ProductResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_main_use_case: Arc<dyn GetMainCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    get_children_use_case: Arc<dyn GetCategoryChildrenUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
}

impl CategoryApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_main_use_case: Arc<dyn GetMainCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        get_children_use_case: Arc<dyn GetCategoryChildrenUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
        get_products_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_main_use_case,
            get_by_id_use_case,
            get_children_use_case,
            update_use_case,
            delete_use_case,
            get_products_use_case,
        }
    }
}

/// Category API
///
/// Browsing and maintenance of the category tree.
#[OpenApi]
impl CategoryApi {
    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(
        &self,
        _auth: JwtBearer,
        body: Json<CategoryRequest>,
    ) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            name: body.0.name,
            parent_id: body.0.parent_category_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List all categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> CategoryListResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => {
                CategoryListResponse::Ok(Json(categories.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                CategoryListResponse::InternalError(json)
            }
        }
    }

    /// List main categories
    ///
    /// Categories without a parent, the roots of the tree.
    #[oai(path = "/categories/main", method = "get", tag = "ApiTags::Categories")]
    async fn get_main_categories(&self) -> CategoryListResponse {
        match self.get_main_use_case.execute().await {
            Ok(categories) => {
                CategoryListResponse::Ok(Json(categories.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                CategoryListResponse::InternalError(json)
            }
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_id(&self, id: Path<String>) -> GetCategoryResponse {
        let id = match parse_id(&id.0, "category") {
            Ok(id) => id,
            Err(json) => return GetCategoryResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id })
            .await
        {
            Ok(category) => GetCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCategoryResponse::NotFound(json),
                    _ => GetCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List subcategories
    ///
    /// Direct children of a category.
    #[oai(
        path = "/categories/:id/children",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn get_children(&self, id: Path<String>) -> CategoryChildrenResponse {
        let id = match parse_id(&id.0, "category") {
            Ok(id) => id,
            Err(json) => return CategoryChildrenResponse::BadRequest(json),
        };

        match self
            .get_children_use_case
            .execute(GetCategoryChildrenParams { id })
            .await
        {
            Ok(children) => {
                CategoryChildrenResponse::Ok(Json(children.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CategoryChildrenResponse::NotFound(json),
                    _ => CategoryChildrenResponse::InternalError(json),
                }
            }
        }
    }

    /// List products of a category
    #[oai(
        path = "/categories/:id/products",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn get_products(&self, id: Path<String>) -> CategoryProductsResponse {
        let category_id = match parse_id(&id.0, "category") {
            Ok(id) => id,
            Err(json) => return CategoryProductsResponse::BadRequest(json),
        };

        match self
            .get_products_use_case
            .execute(GetProductsByCategoryParams { category_id })
            .await
        {
            Ok(products) => {
                CategoryProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 | 404 => CategoryProductsResponse::NotFound(json),
                    _ => CategoryProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a category
    ///
    /// Renames or moves a category. A category cannot be moved below itself.
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        _auth: JwtBearer,
        id: Path<String>,
        body: Json<CategoryRequest>,
    ) -> UpdateCategoryResponse {
        let id = match parse_id(&id.0, "category") {
            Ok(id) => id,
            Err(json) => return UpdateCategoryResponse::BadRequest(json),
        };
        let params = UpdateCategoryParams {
            id,
            name: body.0.name,
            parent_id: body.0.parent_category_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Only leaf categories can be deleted; their products become uncategorized.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, _auth: JwtBearer, id: Path<String>) -> DeleteCategoryResponse {
        let id = match parse_id(&id.0, "category") {
            Ok(id) => id,
            Err(json) => return DeleteCategoryResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryChildrenResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CategoryProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
