use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::decrease_item::{
    DecreaseCartItemParams, DecreaseCartItemUseCase,
};
use business::domain::cart::use_cases::delete_item::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::increase_item::{
    IncreaseCartItemParams, IncreaseCartItemUseCase,
};

use crate::api::cart::dto::{AddCartItemRequest, CartItemResponse, CartResponse, ClearCartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    increase_item_use_case: Arc<dyn IncreaseCartItemUseCase>,
    decrease_item_use_case: Arc<dyn DecreaseCartItemUseCase>,
    delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        increase_item_use_case: Arc<dyn IncreaseCartItemUseCase>,
        decrease_item_use_case: Arc<dyn DecreaseCartItemUseCase>,
        delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            increase_item_use_case,
            decrease_item_use_case,
            delete_item_use_case,
            clear_use_case,
        }
    }
}

/// Cart API
///
/// The authenticated user's cart. Every change reserves or releases product
/// stock in the same transaction.
#[OpenApi]
impl CartApi {
    /// Get my cart
    ///
    /// Users who never added anything get an empty cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: JwtBearer) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams { user_id: auth.0 })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Clear my cart
    ///
    /// Releases every item back to stock.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: JwtBearer) -> ClearCartApiResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams { user_id: auth.0 })
            .await
        {
            Ok(released_items) => {
                ClearCartApiResponse::Ok(Json(ClearCartResponse { released_items }))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                ClearCartApiResponse::InternalError(json)
            }
        }
    }

    /// Add a product to my cart
    ///
    /// Reserves the units and locks the voucher-discounted unit price. Adding a
    /// product already in the cart merges quantities into the existing item.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: JwtBearer, body: Json<AddCartItemRequest>) -> CartItemApiResponse {
        let params = AddCartItemParams {
            user_id: auth.0,
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        item_response(self.add_item_use_case.execute(params).await)
    }

    /// Increase an item by one
    #[oai(path = "/cart/items/:id/increase", method = "post", tag = "ApiTags::Cart")]
    async fn increase_item(&self, auth: JwtBearer, id: Path<String>) -> CartItemApiResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let params = IncreaseCartItemParams {
            user_id: auth.0,
            item_id,
        };

        item_response(self.increase_item_use_case.execute(params).await)
    }

    /// Decrease an item by one
    ///
    /// Decreasing the last unit removes the item; it is returned with quantity 0.
    #[oai(path = "/cart/items/:id/decrease", method = "post", tag = "ApiTags::Cart")]
    async fn decrease_item(&self, auth: JwtBearer, id: Path<String>) -> CartItemApiResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let params = DecreaseCartItemParams {
            user_id: auth.0,
            item_id,
        };

        item_response(self.decrease_item_use_case.execute(params).await)
    }

    /// Remove an item
    ///
    /// Releases its whole quantity back to stock and returns the removed item.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn delete_item(&self, auth: JwtBearer, id: Path<String>) -> CartItemApiResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let params = DeleteCartItemParams {
            user_id: auth.0,
            item_id,
        };

        item_response(self.delete_item_use_case.execute(params).await)
    }
}

fn parse_item_id(raw: &str) -> Result<Uuid, CartItemApiResponse> {
    parse_id(raw, "cart").map_err(CartItemApiResponse::BadRequest)
}

fn item_response(result: Result<CartItem, CartError>) -> CartItemApiResponse {
    match result {
        Ok(item) => CartItemApiResponse::Ok(Json(item.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                400 => CartItemApiResponse::BadRequest(json),
                404 => CartItemApiResponse::NotFound(json),
                409 => CartItemApiResponse::Conflict(json),
                _ => CartItemApiResponse::InternalError(json),
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartApiResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartItemApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
