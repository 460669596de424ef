use dashboard_ui::prelude::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    dashboard_ui::provide_shell_config(ShellConfig::default());

    view! {
        <Title text="Dashboard" />
        <Meta name="description" content="Dashboard and administration console." />

        <Router>
            <Routes>
                <Route path="" view=DashboardPage />
                <Route path="/dashboard" view=DashboardPage />
                <Route path="/dashboard/*section" view=DashboardPage />
                <Route path="/admin" view=AdminPage />
                <Route path="/admin/*section" view=AdminPage />
                <Route path="/*any" view=NotFoundPage />
            </Routes>
        </Router>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AccountRow {
    name: &'static str,
    role: &'static str,
    status: &'static str,
}

const ACCOUNTS: &[AccountRow] = &[
    AccountRow {
        name: "Ada Park",
        role: "Owner",
        status: "active",
    },
    AccountRow {
        name: "Sam Ortiz",
        role: "Editor",
        status: "pending",
    },
    AccountRow {
        name: "Lee Huang",
        role: "Viewer",
        status: "suspended",
    },
];

fn status_badge(status: &str) -> BadgeVariant {
    match status {
        "active" => BadgeVariant::Default,
        "pending" => BadgeVariant::Secondary,
        "suspended" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (refreshes, set_refreshes) = create_signal(0u32);
    let refresh = Callback::new(move |_: ev::MouseEvent| {
        set_refreshes.update(|count| *count += 1);
        logging::log!("dashboard refresh requested");
    });

    view! {
        <DashboardLayout>
            <section class="flex flex-col gap-6 p-8">
                <header class="flex items-center justify-between">
                    <h1 class="text-2xl font-semibold">"Overview"</h1>
                    <div class="flex items-center gap-2">
                        <Badge variant=BadgeVariant::Secondary>
                            {move || format!("{} refreshes", refreshes.get())}
                        </Badge>
                        <Button on_click=refresh>"Refresh"</Button>
                        <Button
                            variant=ButtonVariant::Outline
                            attr:title="Switch to the admin area"
                            as_child=Callback::new(|slot: ButtonSlot| {
                                let on_click = slot.click();
                                let disabled = slot.disabled.clone();
                                let ButtonSlot { class, variant, attrs, .. } = slot;
                                view! {
                                    <a
                                        href="/admin"
                                        class=class
                                        aria-disabled=move || disabled.get()
                                        data-ui-kind="button"
                                        data-ui-variant=variant.token()
                                        on:click={on_click}
                                        {..attrs}
                                    >
                                        "Open admin"
                                    </a>
                                }
                                .into_view()
                            })
                        />
                    </div>
                </header>
                <div class="grid gap-4">
                    <Skeleton class="h-24 w-full" />
                    <Skeleton class="h-4 w-[250px]" />
                    <Skeleton class="h-4 w-[200px]" />
                </div>
            </section>
        </DashboardLayout>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <section class="flex flex-col gap-6 p-8">
                <h1 class="text-2xl font-semibold">"Accounts"</h1>
                <ul class="flex flex-col gap-2">
                    {ACCOUNTS
                        .iter()
                        .map(|account| {
                            view! {
                                <li class="flex items-center justify-between rounded-md border p-3">
                                    <span>{account.name}" · "{account.role}</span>
                                    <Badge variant=status_badge(account.status)>
                                        {account.status}
                                    </Badge>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-2">
                    <Button size=ButtonSize::Sm>"Invite user"</Button>
                    <Button variant=ButtonVariant::Destructive size=ButtonSize::Sm disabled=true>
                        "Remove selected"
                    </Button>
                </div>
            </section>
        </AdminLayout>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <DashboardLayout>
            <section class="flex flex-col items-start gap-4 p-8">
                <h1 class="text-2xl font-semibold">"Page not found"</h1>
                <Button
                    variant=ButtonVariant::Link
                    as_child=Callback::new(|slot: ButtonSlot| {
                        view! { <a href="/dashboard" class=slot.class>"Back to dashboard"</a> }
                            .into_view()
                    })
                />
            </section>
        </DashboardLayout>
    }
}
