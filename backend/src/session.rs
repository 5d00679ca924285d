use std::time::Instant;

use actix::{Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web_actors::ws;
use log::{error, info, trace, warn};

use crate::config::ViewSettings;
use crate::push::{PushError, Tick};
use crate::ticker::Ticker;
use crate::view::TickingCounterView;

/// One connected browser and the view it is looking at.
pub struct ViewSession {
    view: TickingCounterView,
    settings: ViewSettings,
    ticker: Option<Ticker>,
    last_heard: Instant,
    #[cfg(test)]
    record: Option<std::sync::Arc<std::sync::Mutex<tests::SessionRecord>>>,
}

impl ViewSession {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            view: TickingCounterView::new(settings.label.clone()),
            settings,
            ticker: None,
            last_heard: Instant::now(),
            #[cfg(test)]
            record: None,
        }
    }

    #[cfg(test)]
    fn recorded(
        settings: ViewSettings,
        record: std::sync::Arc<std::sync::Mutex<tests::SessionRecord>>,
    ) -> Self {
        Self {
            record: Some(record),
            ..Self::new(settings)
        }
    }

    #[cfg(test)]
    fn note_started(&self, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(record) = &self.record {
            let mut record = record.lock().unwrap();
            record.addr = Some(ctx.address());
            record.ticker = self.ticker.as_ref().map(Ticker::status);
        }
    }

    #[cfg(test)]
    fn note_stopped(&self) {
        if let Some(record) = &self.record {
            record.lock().unwrap().detached = Some((self.view.state(), self.view.value()));
        }
    }

    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let timeout = self.settings.client_timeout;
        ctx.run_interval(self.settings.heartbeat_interval, move |act, ctx| {
            if act.last_heard.elapsed() > timeout {
                warn!("client silent for over {timeout:?}, closing view session");
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }
}

impl Actor for ViewSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.view.attach();
        self.ticker = Some(Ticker::spawn(
            self.settings.tick_period,
            ctx.address().recipient(),
        ));
        self.heartbeat(ctx);
        info!("view attached: {}", self.view.label());
        #[cfg(test)]
        self.note_started(ctx);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        self.view.detach();
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        info!("view detached at {}", self.view.value());
        #[cfg(test)]
        self.note_stopped();
    }
}

impl Handler<Tick> for ViewSession {
    type Result = Result<(), PushError>;

    fn handle(&mut self, _: Tick, ctx: &mut Self::Context) -> Self::Result {
        let update = self.view.tick()?;
        match serde_json::to_string(&update) {
            Ok(frame) => {
                trace!("push {}", update.heading);
                ctx.text(frame);
                Ok(())
            }
            Err(err) => {
                let err = PushError::from(err);
                error!("{err}");
                ctx.stop();
                Err(err)
            }
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ViewSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        let msg = match msg {
            Ok(msg) => msg,
            Err(err) => {
                warn!("websocket protocol error: {err}");
                ctx.stop();
                return;
            }
        };
        self.last_heard = Instant::now();
        match msg {
            ws::Message::Ping(payload) => ctx.pong(&payload),
            ws::Message::Close(reason) => {
                ctx.close(reason);
                ctx.stop();
            }
            ws::Message::Pong(_)
            | ws::Message::Text(_)
            | ws::Message::Binary(_)
            | ws::Message::Continuation(_)
            | ws::Message::Nop => {}
        }
    }
}
