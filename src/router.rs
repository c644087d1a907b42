use crate::app::AppContext;
use crate::auth::AuthProvider;
use crate::domain::{query_catalog, Category, FilterState};
use crate::errors::ServerError;
use crate::forms::{self, DonationForm, FieldErrors, SellForm, SubmissionBlocked};
use crate::notices::Notice;
use crate::responses::{html_response, html_with_status, redirect, static_asset, ResultResp};
use crate::submissions::{SubmissionKind, SubmissionOutcome};
use crate::telemetry;
use crate::templates::components::NavLink;
use crate::templates::{pages, PageChrome};
use astra::Request;
use chrono::Utc;
use std::io::Read;
use tracing::{debug, error, info, warn};

const MAIN_CSS: &str = include_str!("../static/main.css");
const FORMS_JS: &str = include_str!("../static/forms.js");

/// Sections that exist in the navigation but are not built yet. They render
/// the not-found view on purpose.
pub const PLACEHOLDER_ROUTES: [&str; 7] = [
    "/verification",
    "/help",
    "/emergency",
    "/partners",
    "/learn-more",
    "/login",
    "/register",
];

const KNOWN_PATHS: [&str; 7] = [
    "/",
    "/buy",
    "/profile",
    "/sell",
    "/donate",
    "/auth/login",
    "/auth/logout",
];

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let span = telemetry::request_span(req.method().as_str(), req.uri().path());
    let _enter = span.enter();

    match route(req, ctx) {
        Ok(resp) => {
            debug!(status = resp.status().as_u16(), "handled");
            Ok(resp)
        }
        Err(ServerError::NotFound) => {
            debug!("not found");
            html_with_status(404, pages::not_found_page(&chrome(ctx, "Page Not Found")))
        }
        Err(err) => {
            let status = err.status();
            if status >= 500 {
                error!(error = %err, "request failed");
            } else {
                warn!(error = %err, status, "request rejected");
            }
            let page = pages::error_page(status, &err.public_message(), Some(&chrome(ctx, "Error")));
            html_with_status(status, page)
        }
    }
}

fn route(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&chrome(ctx, "Home"))),
        ("GET", "/buy") => catalog(&req, ctx),
        ("GET", "/profile") => profile(ctx),

        ("GET", "/sell") => {
            let form = SellForm::prefilled(ctx.session.current_user().as_ref().map(|u| u.email.as_str()));
            html_response(pages::sell_page(&sell_chrome(ctx), &form, &FieldErrors::new()))
        }
        ("POST", "/sell") => submit_sale(req, ctx),

        ("GET", "/donate") => html_response(pages::donate_page(
            &donate_chrome(ctx),
            &DonationForm::default(),
            &FieldErrors::new(),
        )),
        ("POST", "/donate") => submit_donation(req, ctx),

        ("POST", "/auth/login") => login(req, ctx),
        ("POST", "/auth/logout") => logout(ctx),

        ("GET", "/static/main.css") => static_asset(MAIN_CSS, mime::TEXT_CSS_UTF_8),
        ("GET", "/static/forms.js") => static_asset(FORMS_JS, mime::APPLICATION_JAVASCRIPT_UTF_8),

        ("GET", p) if PLACEHOLDER_ROUTES.contains(&p) => {
            debug!(path = p, "placeholder route");
            Err(ServerError::NotFound)
        }
        ("GET", p) if p.starts_with("/medicine/") => medicine_detail(&p["/medicine/".len()..], ctx),

        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Frame for a page; drains pending notices so each is shown once.
fn chrome(ctx: &AppContext, title: &str) -> PageChrome {
    PageChrome::new(title)
        .user(ctx.session.current_user())
        .notices(ctx.notices.drain())
}

fn sell_chrome(ctx: &AppContext) -> PageChrome {
    chrome(ctx, "Sell Medicine").active(NavLink::Sell).with_forms_script()
}

fn donate_chrome(ctx: &AppContext) -> PageChrome {
    chrome(ctx, "Donate Medicine").active(NavLink::Donate).with_forms_script()
}

fn catalog(req: &Request, ctx: &AppContext) -> ResultResp {
    let ceiling = ctx.catalog.price_ceiling();
    let filters = match req.uri().query() {
        Some(q) => FilterState::from_pairs_within(url::form_urlencoded::parse(q.as_bytes()), ceiling),
        None => FilterState::with_price_ceiling(ceiling),
    };
    let results = query_catalog(ctx.catalog.records(), &filters);
    debug!(results = results.len(), active = filters.has_active_filters(), "catalog query");

    let vm = pages::CatalogVm {
        filters: &filters,
        results,
        categories: Category::ALL.to_vec(),
        now: Utc::now(),
    };
    let chrome = chrome(ctx, "Buy Medicines").active(NavLink::Buy).with_forms_script();
    html_response(pages::catalog_page(&chrome, &vm))
}

fn medicine_detail(id: &str, ctx: &AppContext) -> ResultResp {
    let found = (!id.is_empty() && !id.contains('/'))
        .then(|| ctx.catalog.find(id))
        .flatten();

    match found {
        Some(record) => {
            let similar = ctx.catalog.similar_to(record, 4);
            let chrome = chrome(ctx, &record.name).active(NavLink::Buy);
            html_response(pages::detail_page(&chrome, record, &similar, Utc::now()))
        }
        None => {
            debug!(id, "unknown medicine");
            html_with_status(404, pages::medicine_not_found_page(&chrome(ctx, "Medicine Not Found")))
        }
    }
}

fn profile(ctx: &AppContext) -> ResultResp {
    let chrome = chrome(ctx, "User Profile");
    match chrome.user.clone() {
        Some(user) => {
            let vm = pages::ProfileVm {
                user: &user,
                active_listings: ctx.catalog.window(0, 3),
                purchases: ctx.catalog.window(1, 4),
                wishlist: ctx.catalog.window(3, 5),
                donations: 2,
                now: Utc::now(),
            };
            html_response(pages::profile_page(&chrome, &vm))
        }
        None => html_response(pages::sign_in_prompt_page(&chrome)),
    }
}

fn login(req: Request, ctx: &AppContext) -> ResultResp {
    let back = back_target(&req);
    let pairs = read_form(req, ctx.config.server.max_body_bytes)?;
    let provider = AuthProvider::parse(forms::field(&pairs, "provider"))?;

    match ctx.session.login(provider) {
        Ok(user) => ctx
            .notices
            .push(Notice::info("Login successful", format!("Welcome back, {}!", user.name))),
        Err(_) => ctx
            .notices
            .push(Notice::error("Login failed", "Please try again later")),
    }
    redirect(&back)
}

fn logout(ctx: &AppContext) -> ResultResp {
    match ctx.session.logout() {
        Ok(()) => ctx.notices.push(Notice::title_only("Logged out successfully")),
        Err(_) => ctx
            .notices
            .push(Notice::error("Logout failed", "Please try again later")),
    }
    redirect("/")
}

fn submit_sale(req: Request, ctx: &AppContext) -> ResultResp {
    let pairs = read_form(req, ctx.config.server.max_body_bytes)?;
    let form = SellForm::from_pairs(&pairs);
    let max_upload = ctx.config.forms.max_image_bytes;

    let listing = match form.validate(max_upload) {
        Ok(listing) => listing,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "sell form invalid");
            return html_with_status(422, pages::sell_page(&sell_chrome(ctx), &form, &errors));
        }
    };

    match forms::require_submission_inputs(ctx.session.is_authenticated(), &form.image, max_upload) {
        Ok(image) => {
            debug!(mime = %image.mime, bytes = image.byte_len, "sale image accepted");
        }
        Err(blocked) => {
            let (status, errors) = blocked_response(ctx, blocked, "Please sign in to list a medicine");
            return html_with_status(status, pages::sell_page(&sell_chrome(ctx), &form, &errors));
        }
    }

    match ctx.run_submission(SubmissionKind::Sale)? {
        SubmissionOutcome::Completed => {
            info!(name = %listing.medicine_name, quantity = listing.quantity, "medicine listed");
            ctx.notices.push(Notice::info(
                "Medicine listed successfully",
                "Your medicine has been listed for sale",
            ));
            redirect("/profile")
        }
        SubmissionOutcome::Cancelled => {
            ctx.notices.push(cancelled_notice());
            html_response(pages::sell_page(&sell_chrome(ctx), &form, &FieldErrors::new()))
        }
    }
}

fn submit_donation(req: Request, ctx: &AppContext) -> ResultResp {
    let pairs = read_form(req, ctx.config.server.max_body_bytes)?;
    let form = DonationForm::from_pairs(&pairs);

    let donation = match form.validate() {
        Ok(donation) => donation,
        Err(errors) => {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "donation form invalid");
            return html_with_status(422, pages::donate_page(&donate_chrome(ctx), &form, &errors));
        }
    };

    let max_upload = ctx.config.forms.max_image_bytes;
    if let Err(blocked) =
        forms::require_submission_inputs(ctx.session.is_authenticated(), &form.image, max_upload)
    {
        let (status, errors) = blocked_response(ctx, blocked, "Please sign in to donate a medicine");
        return html_with_status(status, pages::donate_page(&donate_chrome(ctx), &form, &errors));
    }

    match ctx.run_submission(SubmissionKind::Donation)? {
        SubmissionOutcome::Completed => {
            info!(
                name = %donation.medicine_name,
                recipient = donation.recipient.slug(),
                "donation submitted"
            );
            ctx.notices.push(Notice::info(
                "Donation submitted successfully",
                "Thank you for your generosity! Your donation request has been sent to the selected NGO.",
            ));
            redirect("/profile")
        }
        SubmissionOutcome::Cancelled => {
            ctx.notices.push(cancelled_notice());
            html_response(pages::donate_page(&donate_chrome(ctx), &form, &FieldErrors::new()))
        }
    }
}

/// Queue the matching notice and pick the status for the re-rendered form.
fn blocked_response(ctx: &AppContext, blocked: SubmissionBlocked, sign_in_hint: &str) -> (u16, FieldErrors) {
    let mut errors = FieldErrors::new();
    let status = match blocked {
        SubmissionBlocked::AuthenticationRequired => {
            ctx.notices.push(Notice::error("Authentication required", sign_in_hint));
            401
        }
        SubmissionBlocked::ImageRequired => {
            ctx.notices.push(Notice::error(
                "Image required",
                "Please upload an image of the medicine",
            ));
            422
        }
        SubmissionBlocked::InvalidImage(msg) => {
            errors.add("image", msg);
            422
        }
    };
    debug!(status, "submission blocked");
    (status, errors)
}

fn cancelled_notice() -> Notice {
    Notice::error(
        "Submission cancelled",
        "You signed out before the submission finished",
    )
}

/// Where to send the visitor after signing in: the page they came from,
/// when it is one of ours.
fn back_target(req: &Request) -> String {
    req.headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .and_then(|r| url::Url::parse(r).ok())
        .filter(|u| {
            let host = req.headers().get("Host").and_then(|h| h.to_str().ok());
            match (u.host_str(), host) {
                (Some(referer_host), Some(host)) => {
                    let ours = host.split(':').next().unwrap_or(host);
                    referer_host == ours
                }
                _ => false,
            }
        })
        .map(|u| match u.query() {
            Some(q) => format!("{}?{q}", u.path()),
            None => u.path().to_string(),
        })
        .unwrap_or_else(|| "/".to_string())
}

/// Read an urlencoded body, refusing anything over `limit` bytes.
fn read_form(req: Request, limit: usize) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::PayloadTooLarge);
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
