//! API Routes
//!
//! HTTP endpoint definitions. Thin adapters: each handler builds the service
//! it needs from state, converts the request into a command, and maps the
//! result to a status + JSON body.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::{
    AddCartItemCommand, AuthService, CartService, CustomerService, LoginCommand, OrderLineRequest,
    OrderService, PlaceOrderCommand, SignupCommand, UpdateCustomerCommand,
};

use super::middleware::AuthenticatedCustomer;
use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub customer_id: Uuid,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub username: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CartItemAddRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartItemCreatedResponse {
    pub cart_item_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: Uuid,
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartItemsResponse {
    pub items: Vec<CartItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

/// One order line reference. Extra fields sent by clients are ignored.
#[derive(Debug, Deserialize)]
pub struct OrderLineItemRequest {
    pub cart_item_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OrderCreatedResponse {
    pub order_id: Uuid,
}

// =========================================================================
// Routers
// =========================================================================

/// Routes reachable without a token.
pub fn create_public_router() -> Router<AppState> {
    Router::new()
        .route("/customers/signup", post(signup))
        .route("/customers/login", post(login))
}

/// Routes behind the bearer-token middleware.
pub fn create_protected_router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(get_me))
        .route("/customers", put(update_me))
        .route("/customers", delete(withdraw))
        .route("/customers/password", post(confirm_password))
        .route("/customers/password", patch(update_password))
        .route("/cart-items", get(get_cart_items))
        .route("/cart-items", post(add_cart_item))
        .route("/cart-items/:cart_item_id", patch(update_cart_item_quantity))
        .route("/cart-items/:cart_item_id", delete(delete_cart_item))
        .route("/orders", post(place_order))
}

// =========================================================================
// Customer endpoints
// =========================================================================

/// Sign up a new customer
async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    let command = SignupCommand::new(
        request.username,
        request.password,
        request.phone_number,
        request.address,
    );
    let result = service.signup(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            customer_id: result.customer_id,
            username: result.username,
        }),
    ))
}

/// Verify credentials and hand out an access token
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let service = AuthService::new(state.pool, state.hasher, state.tokens);

    let result = service
        .create_token(LoginCommand::new(request.username, request.password))
        .await?;

    Ok(Json(TokenResponse {
        access_token: result.access_token,
    }))
}

/// Current customer's profile
async fn get_me(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
) -> Result<Json<CustomerResponse>, AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    let customer = service.find_by_username(&identity.username).await?;

    Ok(Json(CustomerResponse {
        username: customer.username.into(),
        phone_number: customer.phone_number,
        address: customer.address,
    }))
}

/// Update phone number and address
async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<StatusCode, AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    let command = UpdateCustomerCommand {
        phone_number: request.phone_number,
        address: request.address,
    };
    service.update_info(&identity.username, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Confirm the current password (e.g. before sensitive changes)
async fn confirm_password(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Json(request): Json<PasswordRequest>,
) -> Result<StatusCode, AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    service
        .confirm_password(&identity.username, &request.password)
        .await?;

    Ok(StatusCode::OK)
}

/// Replace the password
async fn update_password(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Json(request): Json<PasswordRequest>,
) -> Result<StatusCode, AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    service
        .update_password(&identity.username, &request.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Account withdrawal
async fn withdraw(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
) -> Result<StatusCode, AppError> {
    let service = CustomerService::new(state.pool, state.hasher);

    service.withdraw(&identity.username).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Cart endpoints
// =========================================================================

/// List the customer's cart, oldest first
async fn get_cart_items(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
) -> Result<Json<CartItemsResponse>, AppError> {
    let service = CartService::new(state.pool);

    let items = service.list_items(&identity.username).await?;

    Ok(Json(CartItemsResponse {
        items: items
            .into_iter()
            .map(|item| CartItemResponse {
                id: item.id,
                product_id: item.product_id,
                quantity: item.quantity.value(),
            })
            .collect(),
    }))
}

/// Put a product into the cart
async fn add_cart_item(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Json(request): Json<CartItemAddRequest>,
) -> Result<(StatusCode, Json<CartItemCreatedResponse>), AppError> {
    let service = CartService::new(state.pool);

    let command = AddCartItemCommand::new(request.product_id, request.quantity);
    let result = service.add_item(&identity.username, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CartItemCreatedResponse {
            cart_item_id: result.cart_item_id,
        }),
    ))
}

/// Change the quantity of an owned cart item
async fn update_cart_item_quantity(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Path(cart_item_id): Path<Uuid>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<StatusCode, AppError> {
    let service = CartService::new(state.pool);

    service
        .update_quantity(&identity.username, cart_item_id, request.quantity)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove an owned cart item
async fn delete_cart_item(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Path(cart_item_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let service = CartService::new(state.pool);

    service
        .delete_item(&identity.username, cart_item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Order endpoint
// =========================================================================

/// Convert the referenced cart items into an order
async fn place_order(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedCustomer>,
    Json(request): Json<Vec<OrderLineItemRequest>>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), AppError> {
    let service = OrderService::new(state.pool);

    let command = PlaceOrderCommand {
        lines: request
            .into_iter()
            .map(|line| OrderLineRequest {
                cart_item_id: line.cart_item_id,
            })
            .collect(),
    };
    let result = service.place_order(&identity.username, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            order_id: result.order_id,
        }),
    ))
}
