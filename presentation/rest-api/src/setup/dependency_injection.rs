use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::unit_of_work::CartUnitOfWorkPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use persistence::voucher::repository::VoucherRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::decrease_item::DecreaseCartItemUseCaseImpl;
use business::application::cart::delete_item::DeleteCartItemUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::increase_item::IncreaseCartItemUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::get_children::GetCategoryChildrenUseCaseImpl;
use business::application::category::get_main::GetMainCategoriesUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::get_current::GetCurrentUserUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::voucher::apply_discount::VoucherDiscountServiceImpl;
use business::application::voucher::create::CreateVoucherUseCaseImpl;
use business::application::voucher::delete::DeleteVoucherUseCaseImpl;
use business::application::voucher::get_all::GetAllVouchersUseCaseImpl;
use business::application::voucher::get_by_code::GetVoucherByCodeUseCaseImpl;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::security::JwtTokenService;
use crate::api::voucher::routes::VoucherApi;
use crate::config::jwt_config::JwtConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
    pub voucher_api: VoucherApi,
    pub cart_api: CartApi,
    /// Shared with the bearer checker through request data
    pub token_service: Arc<JwtTokenService>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, jwt: &JwtConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let token_service = Arc::new(JwtTokenService::new(jwt));

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let voucher_repository = Arc::new(VoucherRepositoryPostgres::new(pool.clone()));
        let unit_of_work = Arc::new(CartUnitOfWorkPostgres::new(pool));

        let discounts = Arc::new(VoucherDiscountServiceImpl {
            repository: voucher_repository.clone(),
            logger: logger.clone(),
        });

        // User use cases
        let auth_api = AuthApi::new(
            Arc::new(RegisterUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(LoginUseCaseImpl {
                repository: user_repository.clone(),
                tokens: token_service.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCurrentUserUseCaseImpl {
                repository: user_repository,
                logger: logger.clone(),
            }),
        );

        // Category use cases
        let get_products_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let category_api = CategoryApi::new(
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMainCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryChildrenUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            get_products_by_category_use_case,
        );

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository,
                logger: logger.clone(),
            }),
        );

        // Voucher use cases
        let voucher_api = VoucherApi::new(
            Arc::new(CreateVoucherUseCaseImpl {
                repository: voucher_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllVouchersUseCaseImpl {
                repository: voucher_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetVoucherByCodeUseCaseImpl {
                repository: voucher_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteVoucherUseCaseImpl {
                repository: voucher_repository,
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                unit_of_work: unit_of_work.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                unit_of_work: unit_of_work.clone(),
                discounts,
                logger: logger.clone(),
            }),
            Arc::new(IncreaseCartItemUseCaseImpl {
                unit_of_work: unit_of_work.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DecreaseCartItemUseCaseImpl {
                unit_of_work: unit_of_work.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCartItemUseCaseImpl {
                unit_of_work: unit_of_work.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                unit_of_work,
                logger,
            }),
        );

        Ok(Self {
            health_api: HealthApi,
            auth_api,
            category_api,
            product_api,
            voucher_api,
            cart_api,
            token_service,
        })
    }
}
