use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::voucher::use_cases::create::{CreateVoucherParams, CreateVoucherUseCase};
use business::domain::voucher::use_cases::delete::{DeleteVoucherParams, DeleteVoucherUseCase};
use business::domain::voucher::use_cases::get_all::GetAllVouchersUseCase;
use business::domain::voucher::use_cases::get_by_code::{
    GetVoucherByCodeParams, GetVoucherByCodeUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;
use crate::api::voucher::dto::{CreateVoucherRequest, VoucherResponse};

pub struct VoucherApi {
    create_use_case: Arc<dyn CreateVoucherUseCase>,
    get_all_use_case: Arc<dyn GetAllVouchersUseCase>,
    get_by_code_use_case: Arc<dyn GetVoucherByCodeUseCase>,
    delete_use_case: Arc<dyn DeleteVoucherUseCase>,
}

impl VoucherApi {
    pub fn new(
        create_use_case: Arc<dyn CreateVoucherUseCase>,
        get_all_use_case: Arc<dyn GetAllVouchersUseCase>,
        get_by_code_use_case: Arc<dyn GetVoucherByCodeUseCase>,
        delete_use_case: Arc<dyn DeleteVoucherUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_code_use_case,
            delete_use_case,
        }
    }
}

/// Voucher API
///
/// Discount codes products can reference.
#[OpenApi]
impl VoucherApi {
    /// Create a voucher
    #[oai(path = "/vouchers", method = "post", tag = "ApiTags::Vouchers")]
    async fn create_voucher(
        &self,
        _auth: JwtBearer,
        body: Json<CreateVoucherRequest>,
    ) -> CreateVoucherResponse {
        let Some(discount) = body.0.discount() else {
            return CreateVoucherResponse::BadRequest(ErrorResponse::validation(
                "voucher.invalid_value",
            ));
        };
        let params = CreateVoucherParams {
            code: body.0.code,
            discount,
            expires_at: body.0.expires_at,
        };

        match self.create_use_case.execute(params).await {
            Ok(voucher) => CreateVoucherResponse::Created(Json(voucher.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateVoucherResponse::BadRequest(json),
                    409 => CreateVoucherResponse::Conflict(json),
                    _ => CreateVoucherResponse::InternalError(json),
                }
            }
        }
    }

    /// List all vouchers
    #[oai(path = "/vouchers", method = "get", tag = "ApiTags::Vouchers")]
    async fn get_all_vouchers(&self, _auth: JwtBearer) -> GetAllVouchersResponse {
        match self.get_all_use_case.execute().await {
            Ok(vouchers) => {
                GetAllVouchersResponse::Ok(Json(vouchers.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetAllVouchersResponse::InternalError(json)
            }
        }
    }

    /// Get a voucher by code
    ///
    /// Codes are matched case-insensitively.
    #[oai(path = "/vouchers/code/:code", method = "get", tag = "ApiTags::Vouchers")]
    async fn get_voucher_by_code(
        &self,
        _auth: JwtBearer,
        code: Path<String>,
    ) -> GetVoucherResponse {
        match self
            .get_by_code_use_case
            .execute(GetVoucherByCodeParams { code: code.0 })
            .await
        {
            Ok(voucher) => GetVoucherResponse::Ok(Json(voucher.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetVoucherResponse::NotFound(json),
                    _ => GetVoucherResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a voucher
    ///
    /// Products referencing the code keep it and sell at list price.
    #[oai(path = "/vouchers/:id", method = "delete", tag = "ApiTags::Vouchers")]
    async fn delete_voucher(&self, _auth: JwtBearer, id: Path<String>) -> DeleteVoucherResponse {
        let id = match parse_id(&id.0, "voucher") {
            Ok(id) => id,
            Err(json) => return DeleteVoucherResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteVoucherParams { id }).await {
            Ok(()) => DeleteVoucherResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteVoucherResponse::NotFound(json),
                    _ => DeleteVoucherResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateVoucherResponse {
    #[oai(status = 201)]
    Created(Json<VoucherResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllVouchersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<VoucherResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetVoucherResponse {
    #[oai(status = 200)]
    Ok(Json<VoucherResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteVoucherResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
