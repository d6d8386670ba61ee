//! The embedded map page. Kept as a `&'static str` so it can be served
//! straight from the binary without filesystem lookups.
//!
//! All rendering decisions arrive from the server as data (`ViewState` and
//! `SetView` messages); the script below only applies them to Leaflet.

pub static INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Line Between Two Coordinates</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/leaflet.min.css">
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/leaflet.min.js"></script>
  <style>
    html, body { height: 100%; margin: 0; font-family: sans-serif; }
    #app { display: flex; flex-direction: column; height: 100%; }
    #controls { padding: 10px; }
    #controls .group { display: inline-block; margin-right: 10px; }
    #controls input { width: 110px; margin-right: 5px; }
    #map { flex: 1; border: 1px solid #ccc; }
  </style>
</head>
<body>
  <div id="app">
    <div id="controls">
      <h2>Line Between Two Coordinates</h2>
      <div class="group">
        <h4>Coordinate 1</h4>
        <input id="first-lat" type="number" placeholder="Lat" value="40.7128">
        <input id="first-lng" type="number" placeholder="Lng" value="-74.0060">
      </div>
      <div class="group">
        <h4>Coordinate 2</h4>
        <input id="second-lat" type="number" placeholder="Lat" value="34.0522">
        <input id="second-lng" type="number" placeholder="Lng" value="-118.2437">
      </div>
      <p>Enter two sets of coordinates above to draw a line between them on the map.</p>
    </div>
    <div id="map"></div>
  </div>
  <script>
    async function main() {
      const options = await (await fetch('/map/options')).json();

      delete L.Icon.Default.prototype._getIconUrl;
      L.Icon.Default.mergeOptions({
        iconRetinaUrl: options.markerIcon2xUrl,
        iconUrl: options.markerIconUrl,
        shadowUrl: options.markerShadowUrl,
      });

      const map = L.map('map').setView(
        [options.fallbackCenter.lat, options.fallbackCenter.lng],
        options.defaultZoom,
      );
      L.tileLayer(options.tileUrl).addTo(map);

      const created = await (await fetch('/plots', { method: 'POST' })).json();
      const wsProtocol = location.protocol === 'https:' ? 'wss://' : 'ws://';
      const socket = new WebSocket(
        wsProtocol + location.host + '/plots/' + created.plotId + '/ws',
      );

      let firstMarker = null;
      let secondMarker = null;
      let line = null;

      function placeMarker(marker, position) {
        if (position == null) {
          if (marker !== null) { map.removeLayer(marker); }
          return null;
        }
        if (marker === null) {
          return L.marker([position.lat, position.lng]).addTo(map);
        }
        marker.setLatLng([position.lat, position.lng]);
        return marker;
      }

      socket.onmessage = function (event) {
        const message = JSON.parse(event.data);
        if (message.type === 'SetView') {
          map.setView(
            [message.payload.center.lat, message.payload.center.lng],
            map.getZoom(),
            { animate: message.payload.animate },
          );
        } else if (message.type === 'ViewState') {
          firstMarker = placeMarker(firstMarker, message.payload.firstMarker || null);
          secondMarker = placeMarker(secondMarker, message.payload.secondMarker || null);
          if (line !== null) { map.removeLayer(line); line = null; }
          if (message.payload.line) {
            line = L.polyline(
              message.payload.line.map(function (point) { return [point.lat, point.lng]; }),
              { color: 'blue' },
            ).addTo(map);
          }
        }
      };

      function bindInput(id, target, field) {
        document.getElementById(id).addEventListener('input', function (event) {
          socket.send(JSON.stringify({
            type: 'FieldEdited',
            payload: { target: target, field: field, rawText: event.target.value },
          }));
        });
      }
      bindInput('first-lat', 'first', 'lat');
      bindInput('first-lng', 'first', 'lng');
      bindInput('second-lat', 'second', 'lat');
      bindInput('second-lng', 'second', 'lng');
    }

    main();
  </script>
</body>
</html>
"#;
