use crate::api::health::HealthResponse;
use models_bloodsuite::analytics::{
    BloodTypeStock, DashboardResponse, DashboardStats, DistrictSummaryResponse,
    DonationsTrendRow, DonorDistrictCount, HospitalDistrictCount,
};
use models_bloodsuite::donation::{CreateDonationRequest, DonationRow, DonationWithHospital};
use models_bloodsuite::donor::{
    BloodTypeCount, DistrictCount, DonorRow, DonorStats, DonorWithContact,
    UpdateDonorProfileRequest,
};
use models_bloodsuite::hospital::{
    HospitalRow, HospitalWithEmail, RegisterHospitalRequest, VerifyHospitalRequest,
};
use models_bloodsuite::inventory::{
    BloodTypeInventorySummary, CreateInventoryUnitRequest, InventorySummary, InventoryTotals,
    InventoryUnitRow, InventoryUnitWithHospital, UpdateInventoryStatusRequest,
};
use models_bloodsuite::notification::{NotificationRow, UnreadCountResponse};
use models_bloodsuite::request::{
    BloodRequestRow, BloodRequestSummary, CreateBloodRequestRequest, PendingByBloodType,
    RequestStats, UpdateRequestStatusRequest,
};
use models_bloodsuite::response::{ErrorResponse, MessageResponse};
use models_bloodsuite::user::{AuthResponse, LoginRequest, MeResponse, PublicUser, RegisterRequest};
use models_bloodsuite::{BloodType, InventoryStatus, RequestStatus, Role, Urgency};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health,
        crate::api::districts,
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::me,
        crate::api::donors::list_donors,
        crate::api::donors::donor_stats,
        crate::api::donors::my_profile,
        crate::api::donors::update_my_profile,
        crate::api::donors::my_donations,
        crate::api::hospitals::list_hospitals,
        crate::api::hospitals::get_hospital,
        crate::api::hospitals::hospital_inventory,
        crate::api::hospitals::register_hospital,
        crate::api::hospitals::verify_hospital,
        crate::api::inventory::list_inventory,
        crate::api::inventory::inventory_summary,
        crate::api::inventory::expiring_units,
        crate::api::inventory::create_unit,
        crate::api::inventory::update_unit_status,
        crate::api::requests::list_requests,
        crate::api::requests::request_stats,
        crate::api::requests::create_request,
        crate::api::requests::update_request_status,
        crate::api::donations::create_donation,
        crate::api::notifications::list_notifications,
        crate::api::notifications::unread_count,
        crate::api::notifications::mark_read,
        crate::api::notifications::mark_all_read,
        crate::api::analytics::dashboard,
        crate::api::analytics::donations_trend,
        crate::api::analytics::district_summary,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MessageResponse,
            Role,
            BloodType,
            Urgency,
            RequestStatus,
            InventoryStatus,
            PublicUser,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            MeResponse,
            DonorRow,
            DonorWithContact,
            UpdateDonorProfileRequest,
            BloodTypeCount,
            DistrictCount,
            DonorStats,
            HospitalRow,
            HospitalWithEmail,
            RegisterHospitalRequest,
            VerifyHospitalRequest,
            InventoryUnitRow,
            InventoryUnitWithHospital,
            CreateInventoryUnitRequest,
            UpdateInventoryStatusRequest,
            BloodTypeInventorySummary,
            InventoryTotals,
            InventorySummary,
            BloodRequestRow,
            BloodRequestSummary,
            CreateBloodRequestRequest,
            UpdateRequestStatusRequest,
            PendingByBloodType,
            RequestStats,
            DonationRow,
            DonationWithHospital,
            CreateDonationRequest,
            NotificationRow,
            UnreadCountResponse,
            DashboardStats,
            BloodTypeStock,
            DashboardResponse,
            DonationsTrendRow,
            DonorDistrictCount,
            HospitalDistrictCount,
            DistrictSummaryResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login, and identity"),
        (name = "districts", description = "Static district list"),
        (name = "donors", description = "Donor directory and self-service"),
        (name = "hospitals", description = "Hospital registry and verification"),
        (name = "inventory", description = "Blood unit stock tracking"),
        (name = "requests", description = "Blood requests and donor fan-out"),
        (name = "donations", description = "Donation records"),
        (name = "notifications", description = "Per-user notifications"),
        (name = "analytics", description = "Dashboards and reporting")
    ),
    info(
        title = "Blood Suite API",
        description = "API for coordinating blood donors, hospitals, inventory, and transfusion requests",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub(crate) struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
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
