use axum::response::Html;

/// Landing page served at `/`, with links into the two listing endpoints.
pub async fn welcome() -> Html<&'static str> {
    Html(
        r#"
    <h1>Welcome to the Hall Booking System</h1>
    <p>Welcome to our Hall Booking System! Here you can manage rooms and bookings.</p>
    <p>Use the following links to navigate:</p>
    <ul>
      <li><a href="/rooms">View All Rooms</a></li>
      <li><a href="/customers">View All Customers</a></li>
    </ul>
  "#,
    )
}
