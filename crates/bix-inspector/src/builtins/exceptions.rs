//! The built-in exception hierarchy, parents listed before children.

pub(super) struct ExceptionDef {
    pub name: &'static str,
    pub bases: &'static [&'static str],
    /// `None` for classes created without a docstring.
    pub doc: Option<&'static str>,
    pub fields: &'static [&'static str],
}

const fn exc(
    name: &'static str,
    base: &'static [&'static str],
    doc: &'static str,
) -> ExceptionDef {
    ExceptionDef {
        name,
        bases: base,
        doc: Some(doc),
        fields: &[],
    }
}

const fn exc_with(
    name: &'static str,
    base: &'static [&'static str],
    doc: &'static str,
    fields: &'static [&'static str],
) -> ExceptionDef {
    ExceptionDef {
        name,
        bases: base,
        doc: Some(doc),
        fields,
    }
}

pub(super) const ERROR_ROOT: &str = "BaseException";

pub(super) const BASE_EXCEPTION_METHODS: &[&str] =
    &["__reduce__", "__setstate__", "add_note", "with_traceback"];
pub(super) const BASE_EXCEPTION_SLOTS: &[&str] = &[
    "__delattr__", "__getattribute__", "__init__", "__repr__", "__setattr__", "__str__",
];
pub(super) const BASE_EXCEPTION_DESCRIPTORS: &[&str] = &[
    "__cause__", "__context__", "__dict__", "__suppress_context__", "__traceback__", "args",
];

pub(super) const BASE_EXCEPTION_DOC: &str = "Common base class for all exceptions";

pub(super) const EXCEPTIONS: &[ExceptionDef] = &[
    exc("Exception", &["BaseException"], "Common base class for all non-exit exceptions."),
    exc("GeneratorExit", &["BaseException"], "Request that a generator exit."),
    exc("KeyboardInterrupt", &["BaseException"], "Program interrupted by user."),
    exc_with(
        "SystemExit",
        &["BaseException"],
        "Request to exit from the interpreter.",
        &["code"],
    ),
    exc_with(
        "BaseExceptionGroup",
        &["BaseException"],
        "A combination of multiple unrelated exceptions.",
        &["exceptions", "message"],
    ),
    ExceptionDef {
        name: "ExceptionGroup",
        bases: &["BaseExceptionGroup", "Exception"],
        doc: None,
        fields: &[],
    },
    exc("ArithmeticError", &["Exception"], "Base class for arithmetic errors."),
    exc("FloatingPointError", &["ArithmeticError"], "Floating point operation failed."),
    exc("OverflowError", &["ArithmeticError"], "Result too large to be represented."),
    exc(
        "ZeroDivisionError",
        &["ArithmeticError"],
        "Second argument to a division or modulo operation was zero.",
    ),
    exc("AssertionError", &["Exception"], "Assertion failed."),
    exc_with("AttributeError", &["Exception"], "Attribute not found.", &["name", "obj"]),
    exc("BufferError", &["Exception"], "Buffer error."),
    exc("EOFError", &["Exception"], "Read beyond end of file."),
    exc_with(
        "ImportError",
        &["Exception"],
        "Import can't find module, or can't find name in module.",
        &["msg", "name", "name_from", "path"],
    ),
    exc("ModuleNotFoundError", &["ImportError"], "Module not found."),
    exc("LookupError", &["Exception"], "Base class for lookup errors."),
    exc("IndexError", &["LookupError"], "Sequence index out of range."),
    exc("KeyError", &["LookupError"], "Mapping key not found."),
    exc("MemoryError", &["Exception"], "Out of memory."),
    exc_with("NameError", &["Exception"], "Name not found globally.", &["name"]),
    exc(
        "UnboundLocalError",
        &["NameError"],
        "Local name referenced but not bound to a value.",
    ),
    exc_with(
        "OSError",
        &["Exception"],
        "Base class for I/O related errors.",
        &["characters_written", "errno", "filename", "filename2", "strerror"],
    ),
    exc("BlockingIOError", &["OSError"], "I/O operation would block."),
    exc("ChildProcessError", &["OSError"], "Child process error."),
    exc("ConnectionError", &["OSError"], "Connection error."),
    exc("BrokenPipeError", &["ConnectionError"], "Broken pipe."),
    exc("ConnectionAbortedError", &["ConnectionError"], "Connection aborted."),
    exc("ConnectionRefusedError", &["ConnectionError"], "Connection refused."),
    exc("ConnectionResetError", &["ConnectionError"], "Connection reset."),
    exc("FileExistsError", &["OSError"], "File already exists."),
    exc("FileNotFoundError", &["OSError"], "File not found."),
    exc("InterruptedError", &["OSError"], "Interrupted by signal."),
    exc("IsADirectoryError", &["OSError"], "Operation doesn't work on directories."),
    exc("NotADirectoryError", &["OSError"], "Operation only works on directories."),
    exc("PermissionError", &["OSError"], "Not enough permissions."),
    exc("ProcessLookupError", &["OSError"], "Process not found."),
    exc("TimeoutError", &["OSError"], "Timeout expired."),
    exc("ReferenceError", &["Exception"], "Weak ref proxy used after referent went away."),
    exc("RuntimeError", &["Exception"], "Unspecified run-time error."),
    exc(
        "NotImplementedError",
        &["RuntimeError"],
        "Method or function hasn't been implemented yet.",
    ),
    exc("RecursionError", &["RuntimeError"], "Recursion limit exceeded."),
    exc("StopAsyncIteration", &["Exception"], "Signal the end from iterator.__anext__()."),
    exc_with(
        "StopIteration",
        &["Exception"],
        "Signal the end from iterator.__next__().",
        &["value"],
    ),
    exc_with(
        "SyntaxError",
        &["Exception"],
        "Invalid syntax.",
        &[
            "end_lineno",
            "end_offset",
            "filename",
            "lineno",
            "msg",
            "offset",
            "print_file_and_line",
            "text",
        ],
    ),
    exc("IndentationError", &["SyntaxError"], "Improper indentation."),
    exc("TabError", &["IndentationError"], "Improper mixture of spaces and tabs."),
    exc(
        "SystemError",
        &["Exception"],
        "Internal error in the Python interpreter.\n\nPlease report this to the Python maintainer, along with the traceback,\nthe Python version, and the hardware/OS platform and version.",
    ),
    exc("TypeError", &["Exception"], "Inappropriate argument type."),
    exc("ValueError", &["Exception"], "Inappropriate argument value (of correct type)."),
    exc("UnicodeError", &["ValueError"], "Unicode related error."),
    exc_with(
        "UnicodeDecodeError",
        &["UnicodeError"],
        "Unicode decoding error.",
        &["encoding", "end", "object", "reason", "start"],
    ),
    exc_with(
        "UnicodeEncodeError",
        &["UnicodeError"],
        "Unicode encoding error.",
        &["encoding", "end", "object", "reason", "start"],
    ),
    exc_with(
        "UnicodeTranslateError",
        &["UnicodeError"],
        "Unicode translation error.",
        &["encoding", "end", "object", "reason", "start"],
    ),
    exc("Warning", &["Exception"], "Base class for warning categories."),
    exc(
        "BytesWarning",
        &["Warning"],
        "Base class for warnings about bytes and buffer related problems, mostly\nrelated to conversion from str or comparing to str.",
    ),
    exc(
        "DeprecationWarning",
        &["Warning"],
        "Base class for warnings about deprecated features.",
    ),
    exc("EncodingWarning", &["Warning"], "Base class for warnings about encodings."),
    exc(
        "FutureWarning",
        &["Warning"],
        "Base class for warnings about constructs that will change semantically\nin the future.",
    ),
    exc(
        "ImportWarning",
        &["Warning"],
        "Base class for warnings about probable mistakes in module imports",
    ),
    exc(
        "PendingDeprecationWarning",
        &["Warning"],
        "Base class for warnings about features which will be deprecated\nin the future.",
    ),
    exc(
        "ResourceWarning",
        &["Warning"],
        "Base class for warnings about resource usage.",
    ),
    exc(
        "RuntimeWarning",
        &["Warning"],
        "Base class for warnings about dubious runtime behavior.",
    ),
    exc(
        "SyntaxWarning",
        &["Warning"],
        "Base class for warnings about dubious syntax.",
    ),
    exc(
        "UnicodeWarning",
        &["Warning"],
        "Base class for warnings about Unicode related problems, mostly\nrelated to conversion problems.",
    ),
    exc(
        "UserWarning",
        &["Warning"],
        "Base class for warnings generated by user code.",
    ),
];

/// Legacy names bound to an existing exception class.
pub(super) const ALIASES: &[(&str, &str)] = &[("EnvironmentError", "OSError"), ("IOError", "OSError")];

/// Methods `BaseExceptionGroup` defines on top of `BaseException`.
pub(super) const GROUP_METHODS: &[&str] = &["derive", "split", "subgroup"];
