pub mod u001_generation_form;
