use chrono::NaiveDate;
use contracts::domain::a007_payment::Payment;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_payment::api as payment_api;
use crate::shared::date_utils::{format_date, format_money};

fn parse_bound(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Client-side date-range filter. An empty or unparsable bound leaves that
/// side open; payments with unparsable dates are excluded from a bounded
/// query.
fn filter_by_range(payments: &[Payment], from: &str, to: &str) -> Vec<Payment> {
    let from = parse_bound(from);
    let to = parse_bound(to);

    payments
        .iter()
        .filter(|p| {
            let date = parse_bound(&p.payment_date);
            match date {
                Some(date) => {
                    from.map(|f| date >= f).unwrap_or(true) && to.map(|t| date <= t).unwrap_or(true)
                }
                None => from.is_none() && to.is_none(),
            }
        })
        .cloned()
        .collect()
}

/// Income report: payments filtered by a date range, with the period total.
#[component]
pub fn IncomeReportPage() -> impl IntoView {
    let all_payments: RwSignal<Vec<Payment>> = RwSignal::new(Vec::new());
    let visible: RwSignal<Vec<Payment>> = RwSignal::new(Vec::new());
    let from_date = RwSignal::new(String::new());
    let to_date = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let apply_filter = move || {
        let filtered = filter_by_range(
            &all_payments.get_untracked(),
            &from_date.get_untracked(),
            &to_date.get_untracked(),
        );
        visible.set(filtered);
    };

    spawn_local(async move {
        match payment_api::fetch_all().await {
            Ok(list) => {
                all_payments.set(list);
                apply_filter();
            }
            Err(e) => set_error.set(Some(format!("No se pudo cargar los pagos: {}", e))),
        }
    });

    let total = move || visible.get().iter().map(|p| p.amount).sum::<f64>();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Informe de ingresos"</h1>
                    <Badge>{move || visible.get().len().to_string()}</Badge>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <div class="form__group">
                    <Label>"Desde"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || from_date.get()
                        on:input=move |ev| {
                            from_date.set(event_target_value(&ev));
                            apply_filter();
                        }
                    />
                </div>
                <div class="form__group">
                    <Label>"Hasta"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || to_date.get()
                        on:input=move |ev| {
                            to_date.set(event_target_value(&ev));
                            apply_filter();
                        }
                    />
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Fecha"</TableHeaderCell>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Metodo"</TableHeaderCell>
                            <TableHeaderCell>"Monto"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |payment| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&payment.payment_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{payment.client_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{payment.method.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_money(payment.amount)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <p class="page__totals">
                    {move || format!("Total del periodo: {}", format_money(total()))}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::filter_by_range;
    use contracts::domain::a007_payment::Payment;

    fn payment(id: i32, date: &str, amount: f64) -> Payment {
        Payment {
            id,
            payment_date: date.to_string(),
            amount,
            ..Payment::default()
        }
    }

    #[test]
    fn open_range_returns_everything() {
        let payments = vec![payment(1, "2026-07-01", 100.0), payment(2, "2026-08-01", 50.0)];
        assert_eq!(filter_by_range(&payments, "", "").len(), 2);
    }

    #[test]
    fn bounds_are_inclusive() {
        let payments = vec![
            payment(1, "2026-07-01", 100.0),
            payment(2, "2026-07-15", 50.0),
            payment(3, "2026-08-01", 25.0),
        ];
        let filtered = filter_by_range(&payments, "2026-07-01", "2026-07-15");
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn unparsable_dates_are_excluded_from_bounded_query() {
        let payments = vec![payment(1, "???", 100.0), payment(2, "2026-07-15", 50.0)];
        let filtered = filter_by_range(&payments, "2026-07-01", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }
}
