use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        attendance::{AttendanceDto, CheckInDto},
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
        member_product::{
            AdjustDto, CreditDto, DeductDto, ExpireResultDto, HistoryDto, LedgerCheckDto,
            LedgerWriteDto, MemberProductDto, PurchaseDto, RemainingDto, UpdateMemberProductDto,
        },
        payment::{CreatePaymentDto, PaymentDto, PaymentSummaryDto, RefundDto},
    },
    server::{
        config::Config,
        controller::{
            attendance, auth, booking, coach, facility, member, member_product, message, notice,
            payment, product, role_permission, training, user,
        },
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ballpark API",
        description = "Members, passes, bookings, attendance and payments of a sports facility"
    ),
    paths(
        member_product::purchase,
        member_product::get_member_product,
        member_product::list_member_passes,
        member_product::update_member_product,
        member_product::deduct,
        member_product::credit,
        member_product::adjust,
        member_product::get_history,
        member_product::get_remaining,
        member_product::verify,
        member_product::expire_overdue,
        booking::create_booking,
        booking::list_bookings,
        booking::get_booking,
        booking::update_booking,
        booking::confirm_booking,
        booking::cancel_booking,
        booking::no_show_booking,
        booking::complete_booking,
        booking::delete_booking,
        attendance::check_in,
        attendance::check_out,
        attendance::list_attendances,
        attendance::get_attendance,
        attendance::delete_attendance,
        payment::create_payment,
        payment::list_payments,
        payment::get_payment,
        payment::refund_payment,
        payment::cancel_payment,
        payment::get_payment_summary,
    ),
    components(schemas(
        ErrorDto,
        MemberProductDto,
        PurchaseDto,
        UpdateMemberProductDto,
        DeductDto,
        CreditDto,
        AdjustDto,
        HistoryDto,
        LedgerWriteDto,
        RemainingDto,
        LedgerCheckDto,
        ExpireResultDto,
        BookingDto,
        CreateBookingDto,
        UpdateBookingDto,
        AttendanceDto,
        CheckInDto,
        PaymentDto,
        CreatePaymentDto,
        RefundDto,
        PaymentSummaryDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "member_product", description = "Passes and their session ledger"),
        (name = "booking", description = "Facility reservations"),
        (name = "attendance", description = "Check-in and check-out"),
        (name = "payment", description = "Payments and refunds")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/init-admin", post(auth::init_admin))
        .route("/api/auth/validate", post(auth::validate))
        .route("/api/docs/openapi.json", get(openapi_json))
}

/// Routes behind `require_auth`.
fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        // Staff accounts
        .route("/api/users", get(user::list_users))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/approve", post(user::approve_user))
        .route("/api/users/{id}/password", put(user::change_password))
        .route(
            "/api/role-permissions/{role}",
            get(role_permission::get_matrix).delete(role_permission::reset_permissions),
        )
        .route(
            "/api/role-permissions/{role}/{area}",
            put(role_permission::update_permission),
        )
        // Members
        .route(
            "/api/members",
            get(member::search_members).post(member::create_member),
        )
        .route(
            "/api/members/by-number/{member_number}",
            get(member::get_member_by_number),
        )
        .route(
            "/api/members/{id}",
            get(member::get_member)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .route("/api/members/{id}/summary", get(member::get_member_summary))
        .route(
            "/api/members/{id}/passes",
            get(member_product::list_member_passes),
        )
        .route(
            "/api/members/{id}/training-logs",
            get(training::list_member_training_logs),
        )
        .route(
            "/api/members/{id}/baseball-records",
            get(training::list_member_baseball_records),
        )
        .route(
            "/api/members/{id}/baseball-records/season",
            get(training::get_season_total),
        )
        // Coaches
        .route(
            "/api/coaches",
            get(coach::list_coaches).post(coach::create_coach),
        )
        .route(
            "/api/coaches/{id}",
            get(coach::get_coach)
                .put(coach::update_coach)
                .delete(coach::delete_coach),
        )
        .route("/api/coaches/{id}/students", get(coach::get_students))
        .route(
            "/api/coaches/{id}/students/count",
            get(coach::get_student_count),
        )
        // Facilities
        .route(
            "/api/facilities",
            get(facility::list_facilities).post(facility::create_facility),
        )
        .route(
            "/api/facilities/{id}",
            get(facility::get_facility)
                .put(facility::update_facility)
                .delete(facility::delete_facility),
        )
        .route(
            "/api/facilities/{id}/slots",
            get(facility::get_slots).put(facility::set_slots),
        )
        .route(
            "/api/facilities/{id}/availability",
            get(facility::get_availability),
        )
        // Products
        .route(
            "/api/products",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        // Passes
        .route("/api/member-products", post(member_product::purchase))
        .route(
            "/api/member-products/expire",
            post(member_product::expire_overdue),
        )
        .route(
            "/api/member-products/{id}",
            get(member_product::get_member_product).put(member_product::update_member_product),
        )
        .route(
            "/api/member-products/{id}/deduct",
            post(member_product::deduct),
        )
        .route(
            "/api/member-products/{id}/credit",
            post(member_product::credit),
        )
        .route(
            "/api/member-products/{id}/adjust",
            post(member_product::adjust),
        )
        .route(
            "/api/member-products/{id}/history",
            get(member_product::get_history),
        )
        .route(
            "/api/member-products/{id}/remaining",
            get(member_product::get_remaining),
        )
        .route(
            "/api/member-products/{id}/verify",
            get(member_product::verify),
        )
        // Bookings
        .route(
            "/api/bookings",
            get(booking::list_bookings).post(booking::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route("/api/bookings/{id}/confirm", post(booking::confirm_booking))
        .route("/api/bookings/{id}/cancel", post(booking::cancel_booking))
        .route("/api/bookings/{id}/no-show", post(booking::no_show_booking))
        .route(
            "/api/bookings/{id}/complete",
            post(booking::complete_booking),
        )
        // Attendance
        .route(
            "/api/attendances",
            get(attendance::list_attendances).post(attendance::check_in),
        )
        .route(
            "/api/attendances/{id}",
            get(attendance::get_attendance).delete(attendance::delete_attendance),
        )
        .route(
            "/api/attendances/{id}/check-out",
            post(attendance::check_out),
        )
        // Payments
        .route(
            "/api/payments",
            get(payment::list_payments).post(payment::create_payment),
        )
        .route("/api/payments/summary", get(payment::get_payment_summary))
        .route("/api/payments/{id}", get(payment::get_payment))
        .route("/api/payments/{id}/refund", post(payment::refund_payment))
        .route("/api/payments/{id}/cancel", post(payment::cancel_payment))
        // Training
        .route(
            "/api/training-logs",
            post(training::create_training_log),
        )
        .route(
            "/api/training-logs/{id}",
            get(training::get_training_log)
                .put(training::update_training_log)
                .delete(training::delete_training_log),
        )
        .route(
            "/api/baseball-records",
            post(training::create_baseball_record),
        )
        .route(
            "/api/baseball-records/{id}",
            get(training::get_baseball_record)
                .put(training::update_baseball_record)
                .delete(training::delete_baseball_record),
        )
        // Announcements and messages
        .route(
            "/api/announcements",
            get(notice::list_announcements).post(notice::create_announcement),
        )
        .route(
            "/api/announcements/{id}",
            get(notice::get_announcement)
                .put(notice::update_announcement)
                .delete(notice::delete_announcement),
        )
        .route(
            "/api/messages",
            get(message::list_messages).post(message::create_message),
        )
        .route(
            "/api/messages/{id}",
            get(message::get_message).delete(message::delete_message),
        )
        .route(
            "/api/messages/{id}/status",
            put(message::update_message_status),
        )
}

/// Builds the complete application with middleware and state.
///
/// Protected routes get `require_auth` as a route layer so unknown paths still
/// answer 404 rather than 401. Static assets, when configured, are served as
/// the fallback.
pub fn router(state: AppState, config: &Config) -> Router {
    let mut app = Router::new()
        .merge(public_routes())
        .merge(protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        )));

    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// Credentialed CORS for the configured origins; methods and headers are mirrored.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin: {}", e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
