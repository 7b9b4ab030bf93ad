//! Sidebar with the route menu. Entries whose allow-list does not contain
//! the session role are hidden; the route guard still protects direct
//! navigation.

use contracts::system::auth::{ROLE_ADMIN, ROLE_RECEPTIONIST};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::guard::allowed;
use crate::system::auth::storage;

struct MenuGroup {
    label: &'static str,
    items: Vec<MenuItem>,
}

struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    permitted: &'static [&'static str],
}

const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_RECEPTIONIST];
const ADMIN_ONLY: &[&str] = &[ROLE_ADMIN];

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Panel",
            items: vec![
                MenuItem { href: "/", label: "Resumen", icon: "dashboard", permitted: ALL_ROLES },
            ],
        },
        MenuGroup {
            label: "Gestion",
            items: vec![
                MenuItem { href: "/clientes", label: "Clientes", icon: "clients", permitted: ALL_ROLES },
                MenuItem { href: "/empleados", label: "Empleados", icon: "employees", permitted: ALL_ROLES },
                MenuItem { href: "/habitaciones", label: "Habitaciones", icon: "rooms", permitted: ALL_ROLES },
                MenuItem { href: "/servicios", label: "Servicios", icon: "services", permitted: ALL_ROLES },
            ],
        },
        MenuGroup {
            label: "Operaciones",
            items: vec![
                MenuItem { href: "/reservas", label: "Reservas", icon: "reservations", permitted: ALL_ROLES },
                MenuItem { href: "/facturas", label: "Facturas", icon: "invoices", permitted: ALL_ROLES },
                MenuItem { href: "/pagos", label: "Pagos", icon: "payments", permitted: ALL_ROLES },
                MenuItem { href: "/limpiezas", label: "Limpiezas", icon: "cleaning", permitted: ALL_ROLES },
            ],
        },
        MenuGroup {
            label: "Informes",
            items: vec![
                MenuItem { href: "/informes/ocupacion", label: "Ocupacion", icon: "calendar", permitted: ALL_ROLES },
                MenuItem { href: "/informes/ingresos", label: "Ingresos", icon: "trending-up", permitted: ALL_ROLES },
            ],
        },
        MenuGroup {
            label: "Administracion",
            items: vec![
                MenuItem { href: "/usuarios", label: "Usuarios", icon: "users", permitted: ADMIN_ONLY },
                MenuItem { href: "/roles", label: "Roles", icon: "shield", permitted: ADMIN_ONLY },
                MenuItem { href: "/hotel", label: "Hotel", icon: "settings", permitted: ADMIN_ONLY },
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    // Session storage is the authority on the role; re-read when the
    // sidebar is (re)created, matching the navigation-time guard check.
    let role = storage::get_role();

    let groups: Vec<_> = get_menu_groups()
        .into_iter()
        .filter_map(|group| {
            let items: Vec<MenuItem> = group
                .items
                .into_iter()
                .filter(|item| allowed(role.as_deref(), item.permitted))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(MenuGroup { label: group.label, items })
            }
        })
        .collect();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("hotel")}
                <span>"Hotel San Marino"</span>
            </div>
            <nav class="sidebar__nav">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <span class="sidebar__group-label">{group.label}</span>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <a href=item.href class="sidebar__link">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
