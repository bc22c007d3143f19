use crate::catalog::FALLBACK_IMAGE_URL;
use crate::day::DayKey;

pub fn render_index(today: DayKey) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &today.to_string())
        .replace("{{DATE_DISPLAY}}", &today.long_display())
        .replace("{{FALLBACK_IMAGE}}", FALLBACK_IMAGE_URL)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Cat</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .loading {
      text-align: center;
      color: #6b645d;
      padding: 48px 0;
    }

    .hidden {
      display: none !important;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .cat-card {
      background: white;
      border-radius: 22px;
      overflow: hidden;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
    }

    .cat-card img {
      width: 100%;
      height: 340px;
      object-fit: cover;
      display: block;
      background: #f1e7da;
    }

    .cat-body {
      padding: 20px 22px 24px;
      display: grid;
      gap: 10px;
    }

    .cat-name {
      display: flex;
      align-items: center;
      gap: 10px;
      margin: 0;
      font-size: 1.5rem;
    }

    .badge {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      background: var(--accent);
      color: white;
      border-radius: 999px;
      padding: 4px 10px;
    }

    .cat-fact {
      margin: 0;
      color: #5f5c57;
      line-height: 1.5;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
      width: 100%;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-favorite {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-favorite.active {
      background: #c63b2b;
    }

    .btn-favorite.pulse {
      animation: pulse 1s ease;
    }

    .btn-share {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes pulse {
      0% { transform: scale(1); }
      40% { transform: scale(1.06); }
      100% { transform: scale(1); }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .panel {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Cat</h1>
      <p class="subtitle" id="date" data-date="{{DATE}}">{{DATE_DISPLAY}}</p>
    </header>

    <div class="loading" id="loading">Finding today's cat...</div>

    <div id="content" class="hidden">
      <section class="panel">
        <div class="stat">
          <span class="label">Day streak</span>
          <span id="streak" class="value streak">0</span>
        </div>
        <div class="stat">
          <span class="label">Total visits</span>
          <span id="visits" class="value">0</span>
        </div>
        <div class="stat">
          <span class="label">Favorites</span>
          <span id="favorites" class="value">0</span>
        </div>
      </section>

      <article class="cat-card" style="margin-top: 24px;">
        <img id="cat-image" src="{{FALLBACK_IMAGE}}" alt="Cat of the day" />
        <div class="cat-body">
          <h2 class="cat-name"><span id="cat-name"></span><span id="personal-badge" class="badge hidden">Personal cat</span></h2>
          <p class="cat-fact" id="cat-fact"></p>
        </div>
      </article>

      <section class="actions" style="margin-top: 24px;">
        <form id="favorite-form" method="post" action="/favorite">
          <button class="btn-favorite" id="favorite-btn" type="submit">Add to favorites</button>
        </form>
        <button class="btn-share" id="share-btn" type="button">Share</button>
      </section>
    </div>

    <div class="status" id="status"></div>
    <p class="hint">A new cat arrives every calendar day. Come back tomorrow to keep your streak going.</p>
  </main>

  <script>
    const FALLBACK_IMAGE = '{{FALLBACK_IMAGE}}';
    const loadingEl = document.getElementById('loading');
    const contentEl = document.getElementById('content');
    const dateEl = document.getElementById('date');
    const streakEl = document.getElementById('streak');
    const visitsEl = document.getElementById('visits');
    const favoritesEl = document.getElementById('favorites');
    const imageEl = document.getElementById('cat-image');
    const nameEl = document.getElementById('cat-name');
    const factEl = document.getElementById('cat-fact');
    const badgeEl = document.getElementById('personal-badge');
    const favoriteForm = document.getElementById('favorite-form');
    const favoriteBtn = document.getElementById('favorite-btn');
    const shareBtn = document.getElementById('share-btn');
    const statusEl = document.getElementById('status');

    const newSessionId = () => {
      if (window.crypto && typeof window.crypto.randomUUID === 'function') {
        return window.crypto.randomUUID();
      }
      return `${Date.now().toString(36)}-${Math.random().toString(36).slice(2)}`;
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    imageEl.addEventListener('error', () => {
      if (imageEl.src !== FALLBACK_IMAGE) {
        imageEl.src = FALLBACK_IMAGE;
      }
    });

    const updateUI = (data) => {
      dateEl.textContent = data.date_display;
      dateEl.dataset.date = data.date;
      streakEl.textContent = data.streak;
      visitsEl.textContent = data.total_visits;
      favoritesEl.textContent = data.favorite_count;
      favoriteBtn.textContent = data.is_favorite ? 'Remove from favorites' : 'Add to favorites';
      favoriteBtn.classList.toggle('active', data.is_favorite);

      if (data.cat) {
        imageEl.src = data.cat.imageUrl || FALLBACK_IMAGE;
        imageEl.alt = `${data.cat.displayName}, the cat of the day`;
        nameEl.textContent = data.cat.displayName;
        factEl.textContent = data.cat.fact;
        badgeEl.classList.toggle('hidden', !data.cat.isPersonal);
      }

      loadingEl.classList.add('hidden');
      contentEl.classList.remove('hidden');
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const toggleFavorite = async () => {
      const data = await postJson('/api/favorite');
      updateUI(data);
      favoriteBtn.classList.add('pulse');
      setStatus(data.is_favorite ? 'Saved to favorites' : 'Removed from favorites', 'ok');
      setTimeout(() => {
        favoriteBtn.classList.remove('pulse');
        setStatus('', '');
      }, 1000);
    };

    const shareCat = async () => {
      const res = await fetch('/api/share');
      if (!res.ok) {
        return;
      }
      const share = await res.json();
      try {
        if (navigator.share) {
          await navigator.share(share);
          return;
        }
        if (navigator.clipboard) {
          await navigator.clipboard.writeText(`${share.text} ${share.url}`);
          setStatus('Link copied', 'ok');
          setTimeout(() => setStatus('', ''), 1000);
        }
      } catch (_) {
        // cancelled or not permitted
      }
    };

    let started = false;
    const init = async () => {
      if (started) {
        return;
      }
      started = true;
      const data = await postJson('/api/visit', { session_id: newSessionId() });
      updateUI(data);
    };

    favoriteForm.addEventListener('submit', (event) => {
      event.preventDefault();
      toggleFavorite().catch((err) => setStatus(err.message, 'error'));
    });

    shareBtn.addEventListener('click', () => {
      shareCat().catch(() => {});
    });

    init().catch((err) => {
      loadingEl.textContent = 'Could not load today\'s cat.';
      setStatus(err.message, 'error');
    });
  </script>
</body>
</html>
"#;
