mod html;
mod outline;
