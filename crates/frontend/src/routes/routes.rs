use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d400_overview::ui::OverviewPage;
use crate::domain::a001_client::ui::list::ClientsListPage;
use crate::domain::a002_employee::ui::list::EmployeesListPage;
use crate::domain::a003_room::ui::list::RoomsListPage;
use crate::domain::a004_service::ui::list::ServicesListPage;
use crate::domain::a005_reservation::ui::list::ReservationsListPage;
use crate::domain::a006_invoice::ui::list::InvoicesListPage;
use crate::domain::a007_payment::ui::list::PaymentsListPage;
use crate::domain::a008_cleaning::ui::list::CleaningsListPage;
use crate::domain::a009_hotel::ui::HotelSettingsPage;
use crate::layout::Shell;
use crate::reports::p900_occupancy::ui::OccupancyReportPage;
use crate::reports::p901_income::ui::IncomeReportPage;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_authorized::NotAuthorizedPage;
use crate::system::roles::ui::list::RolesListPage;
use crate::system::users::ui::list::UsersListPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page__empty">"Pagina no encontrada"</p> }>
                    <Route path=path!("/") view=OverviewPage />
                    <Route path=path!("/clientes") view=ClientsListPage />
                    <Route path=path!("/empleados") view=EmployeesListPage />
                    <Route path=path!("/habitaciones") view=RoomsListPage />
                    <Route path=path!("/servicios") view=ServicesListPage />
                    <Route path=path!("/reservas") view=ReservationsListPage />
                    <Route path=path!("/facturas") view=InvoicesListPage />
                    <Route path=path!("/pagos") view=PaymentsListPage />
                    <Route path=path!("/limpiezas") view=CleaningsListPage />
                    <Route path=path!("/informes/ocupacion") view=OccupancyReportPage />
                    <Route path=path!("/informes/ingresos") view=IncomeReportPage />
                    <Route path=path!("/usuarios") view=UsersListPage />
                    <Route path=path!("/roles") view=RolesListPage />
                    <Route path=path!("/hotel") view=HotelSettingsPage />
                    <Route path=path!("/no-autorizado") view=NotAuthorizedPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
