//! Full admin workflow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `BirthdayAdmin` over
//! real HTTP using ureq with a view that records everything it is asked to do.
//! Validates that request building, response parsing and the reload policy
//! work end-to-end with the actual server.

use birthday_core::{
    AdminError, ApiError, BirthdayAdmin, BirthdayClient, BirthdayForm, HttpMethod, HttpRequest,
    HttpResponse, Listing, Outcome, Transport, TransportError, View,
};

/// Executes requests with ureq. Non-2xx statuses come back as data so the
/// core client handles status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

#[derive(Default)]
struct RecordingView {
    shown: Vec<Listing>,
    alerts: Vec<String>,
    answer: bool,
    cleared: usize,
}

impl View for RecordingView {
    fn show(&mut self, listing: &Listing) {
        self.shown.push(listing.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, _question: &str) -> bool {
        self.answer
    }

    fn clear_form(&mut self) {
        self.cleared += 1;
    }
}

fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn admin_workflow() {
    // Step 1: start mock server on a random port.
    let addr = spawn_server();
    let client = BirthdayClient::new(&format!("http://{addr}/api"));
    let mut admin = BirthdayAdmin::new(client, UreqTransport::new(), RecordingView::default());

    // Step 2: initial load shows the placeholder.
    admin.initialize();
    assert_eq!(admin.view().shown.last(), Some(&Listing::Empty));

    // Step 3: add without the @ prefix.
    let outcome = admin.submit(&BirthdayForm::new("alice", "1990-05-02")).unwrap();
    assert_eq!(outcome, Outcome::Done);
    assert_eq!(admin.view().cleared, 1);
    let rows = admin.view().shown.last().unwrap().rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "@alice — 02.05.1990");
    let alice = rows[0].id;

    // Step 4: a second record lands after the first.
    admin.submit(&BirthdayForm::new("@bob", "1985-11-30")).unwrap();
    let labels: Vec<String> = admin
        .view()
        .shown
        .last()
        .unwrap()
        .rows()
        .iter()
        .map(|r| r.label.clone())
        .collect();
    assert_eq!(labels, vec!["@alice — 02.05.1990", "@bob — 30.11.1985"]);

    // Step 5: the backend rejects a regional date; user is told, list unchanged.
    let shown_before = admin.view().shown.len();
    let err = admin.submit(&BirthdayForm::new("carol", "02.05.1990")).unwrap_err();
    assert!(matches!(err, AdminError::Api(ApiError::Http { status: 422, .. })));
    assert_eq!(admin.view().alerts.len(), 1);
    assert_eq!(admin.view().shown.len(), shown_before);

    // Step 6: declined delete does nothing.
    assert_eq!(admin.delete(alice).unwrap(), Outcome::Cancelled);
    assert_eq!(admin.view().shown.len(), shown_before);

    // Step 7: confirmed delete removes alice.
    admin.view_mut().answer = true;
    assert_eq!(admin.delete(alice).unwrap(), Outcome::Done);
    let rows = admin.view().shown.last().unwrap().rows().to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "@bob — 30.11.1985");

    // Step 8: deleting alice again is reported.
    let err = admin.delete(alice).unwrap_err();
    assert!(matches!(err, AdminError::Api(ApiError::NotFound)));
    assert_eq!(admin.view().alerts.len(), 2);
}

#[test]
fn unreachable_backend_keeps_display_empty() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = BirthdayClient::new(&format!("http://{addr}/api"));
    let mut admin = BirthdayAdmin::new(client, UreqTransport::new(), RecordingView::default());

    admin.initialize();
    assert!(admin.view().shown.is_empty());
    assert!(admin.view().alerts.is_empty());

    let err = admin.submit(&BirthdayForm::new("alice", "1990-05-02")).unwrap_err();
    assert!(matches!(err, AdminError::Transport(_)));
    assert_eq!(admin.view().alerts.len(), 1);
}
